mod app;
mod color;
mod data;
mod state;
mod ui;

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;

use app::LaunchDashApp;
use data::loader::{DEFAULT_SOURCE, DataSource, load_source};
use data::model::{LaunchDataset, PayloadRange, SiteSelection};
use data::transform::chart_data;
use state::{AppState, default_range};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Launch records CSV: a local path or an http(s) URL.
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    data: String,

    /// Initial launch site, or ALL for every site.
    #[arg(short, long, default_value = "ALL")]
    site: String,

    /// Initial lower payload bound in kg (defaults to the data minimum).
    #[arg(long)]
    low: Option<f64>,

    /// Initial upper payload bound in kg (defaults to the data maximum).
    #[arg(long)]
    high: Option<f64>,

    /// Print the chart data for the initial controls as JSON and exit.
    #[arg(long)]
    dump: bool,
}

impl Args {
    fn initial_range(&self, dataset: &LaunchDataset) -> PayloadRange {
        let bounds = default_range(dataset);
        PayloadRange::new(
            self.low.unwrap_or(bounds.low),
            self.high.unwrap_or(bounds.high),
        )
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = DataSource::parse(&args.data);
    let dataset = load_source(&source)
        .with_context(|| format!("loading launch data from {source}"))
        .inspect_err(|e| log::error!("{e:#}"))?;
    log::info!(
        "Loaded {} launches from {source}: sites {:?}, payload bounds {:?}",
        dataset.len(),
        dataset.sites(),
        dataset.payload_bounds()
    );

    if dataset.is_empty() {
        log::warn!("{source} has no launch rows; charts will be empty");
    }

    let site = SiteSelection::from(args.site.as_str());
    if let SiteSelection::Site(name) = &site {
        if !dataset.has_site(name) {
            log::warn!("Site '{name}' does not appear in the data; charts will be empty");
        }
    }
    let range = args.initial_range(&dataset);

    if args.dump {
        let charts = chart_data(&dataset, &site, range);
        let mut out = io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, &charts).context("writing chart data")?;
        writeln!(out).context("writing chart data")?;
        return Ok(());
    }

    let state = AppState::new(source.to_string(), dataset, site, range);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("running dashboard: {e}"))
}
