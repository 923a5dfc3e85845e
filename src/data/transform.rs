use std::collections::HashMap;

use serde::Serialize;

use super::model::{LaunchDataset, PayloadRange, SiteSelection};

pub const SUCCESS_LABEL: &str = "Success";
pub const FAILURE_LABEL: &str = "Failure";

// ---------------------------------------------------------------------------
// Chart data types
// ---------------------------------------------------------------------------

/// What the pie slices count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieKind {
    /// One slice per launch site, sized by its number of successes.
    SuccessesBySite,
    /// "Success" / "Failure" slices for a single site.
    OutcomeSplit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartData {
    pub title: String,
    pub kind: PieKind,
    pub slices: Vec<PieSlice>,
}

impl PieChartData {
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_version_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChartData {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

/// Everything needed to draw both charts for one control state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub site: SiteSelection,
    pub range: PayloadRange,
    pub pie: PieChartData,
    pub scatter: ScatterChartData,
}

// ---------------------------------------------------------------------------
// Transformer
// ---------------------------------------------------------------------------

/// Recompute both charts from scratch for the given control values.
pub fn chart_data(dataset: &LaunchDataset, site: &SiteSelection, range: PayloadRange) -> ChartData {
    let pie = pie_data(dataset, site);
    let scatter = scatter_data(dataset, site, range);
    log::debug!(
        "Charts for site={site} range={range}: {} pie slices, {} scatter points",
        pie.slices.len(),
        scatter.points.len()
    );
    ChartData {
        site: site.clone(),
        range,
        pie,
        scatter,
    }
}

/// Pie slices for the site dropdown value.
///
/// * `ALL` → one slice per distinct site (first-appearance order) holding
///   its success count; sites without successes keep a zero slice.
/// * a site → "Success" and "Failure" counts for that site, omitting a
///   label that has no records. An unknown site yields no slices.
pub fn pie_data(dataset: &LaunchDataset, site: &SiteSelection) -> PieChartData {
    match site {
        SiteSelection::All => {
            let mut successes: HashMap<&str, u32> = HashMap::new();
            for record in dataset.records() {
                *successes.entry(record.launch_site.as_str()).or_default() +=
                    u32::from(record.outcome_class);
            }
            let slices = dataset
                .sites()
                .iter()
                .map(|s| PieSlice {
                    label: s.clone(),
                    count: successes.get(s.as_str()).copied().unwrap_or(0),
                })
                .collect();
            PieChartData {
                title: "Total Successful Launches by Site".to_string(),
                kind: PieKind::SuccessesBySite,
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let (success, failure) = dataset
                .records()
                .iter()
                .filter(|r| r.launch_site == *name)
                .fold((0u32, 0u32), |(s, f), r| {
                    if r.is_success() { (s + 1, f) } else { (s, f + 1) }
                });
            let slices = [(SUCCESS_LABEL, success), (FAILURE_LABEL, failure)]
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(label, count)| PieSlice {
                    label: label.to_string(),
                    count,
                })
                .collect();
            PieChartData {
                title: format!("Success vs Failure for site {name}"),
                kind: PieKind::OutcomeSplit,
                slices,
            }
        }
    }
}

/// Records inside the inclusive payload window, restricted to the selected
/// site. An invalid range (`low > high`, NaN) yields no points.
pub fn scatter_data(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChartData {
    let points = if range.is_valid() {
        dataset
            .records()
            .iter()
            .filter(|r| range.contains(r.payload_mass_kg) && site.matches(&r.launch_site))
            .map(|r| ScatterPoint {
                payload_mass_kg: r.payload_mass_kg,
                outcome_class: r.outcome_class,
                booster_version_category: r.booster_version_category.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let title = match site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Outcome for site {name}"),
    };
    ScatterChartData { title, points }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::tests::{record, three_launches};
    use crate::data::model::LaunchRecord;

    fn all() -> SiteSelection {
        SiteSelection::All
    }

    fn site(name: &str) -> SiteSelection {
        SiteSelection::from(name)
    }

    fn count_for(pie: &PieChartData, label: &str) -> Option<u32> {
        pie.slices.iter().find(|s| s.label == label).map(|s| s.count)
    }

    fn triples(scatter: &ScatterChartData) -> Vec<(f64, u8, &str)> {
        scatter
            .points
            .iter()
            .map(|p| (p.payload_mass_kg, p.outcome_class, p.booster_version_category.as_str()))
            .collect()
    }

    #[test]
    fn all_sites_pie_sums_successes_per_site() {
        let pie = pie_data(&three_launches(), &all());
        assert_eq!(pie.kind, PieKind::SuccessesBySite);
        assert_eq!(count_for(&pie, "siteA"), Some(1));
        assert_eq!(count_for(&pie, "siteB"), Some(1));
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.title, "Total Successful Launches by Site");
    }

    #[test]
    fn site_without_successes_keeps_a_zero_slice() {
        let ds = LaunchDataset::from_records(vec![
            record("siteA", 100.0, 1, "v1"),
            record("siteC", 200.0, 0, "v1"),
        ]);
        let pie = pie_data(&ds, &all());
        assert_eq!(count_for(&pie, "siteC"), Some(0));
        assert_eq!(pie.total(), 1);
    }

    #[test]
    fn single_site_pie_splits_success_and_failure() {
        let pie = pie_data(&three_launches(), &site("siteA"));
        assert_eq!(pie.kind, PieKind::OutcomeSplit);
        assert_eq!(count_for(&pie, SUCCESS_LABEL), Some(1));
        assert_eq!(count_for(&pie, FAILURE_LABEL), Some(1));
        assert_eq!(pie.title, "Success vs Failure for site siteA");
    }

    #[test]
    fn single_site_pie_omits_absent_outcome() {
        let pie = pie_data(&three_launches(), &site("siteB"));
        assert_eq!(
            pie.slices,
            vec![PieSlice {
                label: SUCCESS_LABEL.to_string(),
                count: 1
            }]
        );
    }

    #[test]
    fn range_filters_scatter_for_all_sites() {
        let scatter = scatter_data(&three_launches(), &all(), PayloadRange::new(0.0, 6000.0));
        assert_eq!(triples(&scatter), vec![(5000.0, 1, "v1"), (3000.0, 1, "v2")]);
        assert_eq!(scatter.title, "Payload vs. Outcome for All Sites");
    }

    #[test]
    fn scatter_respects_site_and_range_together() {
        let scatter = scatter_data(
            &three_launches(),
            &site("siteA"),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(triples(&scatter), vec![(5000.0, 1, "v1"), (9000.0, 0, "v1")]);
        assert_eq!(scatter.title, "Payload vs. Outcome for site siteA");
    }

    #[test]
    fn degenerate_range_includes_exact_payload() {
        let scatter = scatter_data(&three_launches(), &all(), PayloadRange::new(5000.0, 5000.0));
        assert_eq!(triples(&scatter), vec![(5000.0, 1, "v1")]);
    }

    #[test]
    fn inverted_range_gives_empty_scatter() {
        let scatter = scatter_data(&three_launches(), &all(), PayloadRange::new(9000.0, 0.0));
        assert!(scatter.points.is_empty());
    }

    #[test]
    fn range_outside_slider_marks_still_filters() {
        let ds = LaunchDataset::from_records(vec![
            record("siteA", 15600.0, 1, "B5"),
            record("siteA", 500.0, 0, "v1"),
        ]);
        let scatter = scatter_data(&ds, &all(), PayloadRange::new(0.0, 15600.0));
        assert_eq!(scatter.points.len(), 2);
    }

    #[test]
    fn unknown_site_gives_empty_charts() {
        let charts = chart_data(
            &three_launches(),
            &site("siteZ"),
            PayloadRange::new(0.0, 10000.0),
        );
        assert!(charts.pie.is_empty());
        assert!(charts.scatter.points.is_empty());
    }

    #[test]
    fn chart_data_serializes_site_as_dropdown_value() {
        let charts = chart_data(&three_launches(), &all(), PayloadRange::new(0.0, 6000.0));
        let json = serde_json::to_value(&charts).unwrap();
        assert_eq!(json["site"], "ALL");
        assert_eq!(json["pie"]["kind"], "successes_by_site");
        assert_eq!(json["range"]["high"], 6000.0);
        assert_eq!(json["scatter"]["points"].as_array().unwrap().len(), 2);
    }

    const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
    const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

    fn arb_dataset() -> impl Strategy<Value = LaunchDataset> {
        prop::collection::vec(
            (0..SITES.len(), 0.0f64..16000.0, 0u8..=1, 0..BOOSTERS.len()),
            0..60,
        )
        .prop_map(|rows| {
            let records: Vec<LaunchRecord> = rows
                .into_iter()
                .map(|(s, payload, class, b)| record(SITES[s], payload, class, BOOSTERS[b]))
                .collect();
            LaunchDataset::from_records(records)
        })
    }

    fn arb_site() -> impl Strategy<Value = SiteSelection> {
        prop_oneof![
            Just(SiteSelection::All),
            (0..SITES.len()).prop_map(|i| SiteSelection::from(SITES[i])),
            Just(SiteSelection::from("Boca Chica")),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_scatter_points_stay_inside_range(
            ds in arb_dataset(),
            sel in arb_site(),
            a in 0.0f64..16000.0,
            b in 0.0f64..16000.0,
        ) {
            let range = PayloadRange::new(a.min(b), a.max(b));
            let scatter = scatter_data(&ds, &sel, range);
            for p in &scatter.points {
                prop_assert!(range.low <= p.payload_mass_kg && p.payload_mass_kg <= range.high);
            }
        }

        #[test]
        fn prop_all_sites_pie_totals_successes(ds in arb_dataset()) {
            let pie = pie_data(&ds, &SiteSelection::All);
            prop_assert_eq!(pie.total(), ds.total_successes());
            prop_assert_eq!(pie.slices.len(), ds.sites().len());
        }

        #[test]
        fn prop_site_pie_totals_site_records(ds in arb_dataset(), i in 0..SITES.len()) {
            let pie = pie_data(&ds, &SiteSelection::from(SITES[i]));
            let expected = ds.records().iter().filter(|r| r.launch_site == SITES[i]).count();
            prop_assert_eq!(pie.total() as usize, expected);
        }

        #[test]
        fn prop_transform_is_idempotent(
            ds in arb_dataset(),
            sel in arb_site(),
            low in 0.0f64..16000.0,
            high in 0.0f64..16000.0,
        ) {
            let range = PayloadRange::new(low, high);
            prop_assert_eq!(chart_data(&ds, &sel, range), chart_data(&ds, &sel, range));
        }
    }
}
