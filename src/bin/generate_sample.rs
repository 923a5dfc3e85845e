use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Write a synthetic launch records CSV for offline use.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output CSV path.
    #[arg(short, long, default_value = "sample_launches.csv")]
    output: PathBuf,

    /// Number of launches to generate.
    #[arg(short, long, default_value_t = 56)]
    rows: usize,

    /// PRNG seed; the same seed always produces the same file.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Debug, Serialize)]
struct LaunchRow<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: usize,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// Booster categories in flight order, with a payload ceiling and success rate.
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 700.0, 0.4),
    ("v1.1", 4500.0, 0.55),
    ("FT", 9600.0, 0.75),
    ("B4", 9600.0, 0.8),
    ("B5", 15600.0, 0.95),
];

/// Launch sites with their relative launch frequency.
const SITES: [(&str, f64); 4] = [
    ("CCAFS LC-40", 0.45),
    ("VAFB SLC-4E", 0.15),
    ("KSC LC-39A", 0.25),
    ("CCAFS SLC-40", 0.15),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick an item by weight. Weights need not sum to one.
    fn weighted<'a, T>(&mut self, items: &'a [(T, f64)]) -> &'a T {
        let total: f64 = items.iter().map(|(_, w)| w).sum();
        let mut pick = self.next_f64() * total;
        for (item, weight) in items {
            if pick < *weight {
                return item;
            }
            pick -= weight;
        }
        &items[items.len() - 1].0
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut successes = 0;
    for i in 0..args.rows {
        // Later flights use newer boosters.
        let era = (i * BOOSTERS.len()) / args.rows.max(1);
        let (booster, max_payload, success_rate) = BOOSTERS[era];
        let site = *rng.weighted(&SITES);
        let payload = (rng.next_f64() * max_payload).round();
        let class = u8::from(rng.chance(success_rate));
        successes += usize::from(class);

        writer
            .serialize(LaunchRow {
                flight_number: i + 1,
                launch_site: site,
                class,
                payload_mass_kg: payload,
                booster_version_category: booster,
            })
            .with_context(|| format!("writing row {i}"))?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} launches ({successes} successful) to {}",
        args.rows,
        args.output.display()
    );
    Ok(())
}
