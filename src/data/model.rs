use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch, deserialized from a header-named CSV row.
/// Columns not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    /// 1 = success, 0 = failure.
    #[serde(rename = "class")]
    pub outcome_class: u8,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome_class == 1
    }
}

// ---------------------------------------------------------------------------
// SiteSelection – dropdown value
// ---------------------------------------------------------------------------

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Current value of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record launched from `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    /// The raw dropdown value (`"ALL"` or the site name).
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// Human-facing label shown in the dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – slider value
// ---------------------------------------------------------------------------

/// Inclusive payload mass window in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// `false` when `low > high` or either bound is NaN.
    pub fn is_valid(&self) -> bool {
        self.low <= self.high
    }

    /// Inclusive on both ends. An invalid range contains nothing.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.is_valid() && self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] kg", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All launch records plus a few pre-computed indices.
///
/// Fields are private: the dataset is built once by the loader and only
/// read afterwards.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    sites: Vec<String>,
    /// Distinct booster categories in order of first appearance.
    booster_categories: Vec<String>,
}

impl LaunchDataset {
    /// Build the site and booster indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites = distinct_in_order(records.iter().map(|r| r.launch_site.as_str()));
        let booster_categories =
            distinct_in_order(records.iter().map(|r| r.booster_version_category.as_str()));
        LaunchDataset {
            records,
            sites,
            booster_categories,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Number of records with `outcome_class == 1`.
    pub fn total_successes(&self) -> u32 {
        self.records.iter().map(|r| u32::from(r.outcome_class)).sum()
    }

    /// `[min, max]` payload over all records, `None` for an empty dataset.
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        let mut masses = self.records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        let (low, high) = masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Some(PayloadRange::new(low, high))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, payload: f64, class: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: booster.to_string(),
            outcome_class: class,
        }
    }

    /// The three-launch fixture used across the data tests.
    pub(crate) fn three_launches() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("siteA", 5000.0, 1, "v1"),
            record("siteA", 9000.0, 0, "v1"),
            record("siteB", 3000.0, 1, "v2"),
        ])
    }

    #[test]
    fn sites_keep_first_appearance_order() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 1.0, 1, "FT"),
            record("CCAFS LC-40", 2.0, 0, "v1.0"),
            record("KSC LC-39A", 3.0, 1, "B4"),
        ]);
        assert_eq!(ds.sites(), ["KSC LC-39A", "CCAFS LC-40"]);
        assert_eq!(ds.booster_categories(), ["FT", "v1.0", "B4"]);
        assert!(ds.has_site("CCAFS LC-40"));
        assert!(!ds.has_site("VAFB SLC-4E"));
    }

    #[test]
    fn payload_bounds_span_all_records() {
        let ds = three_launches();
        assert_eq!(ds.payload_bounds(), Some(PayloadRange::new(3000.0, 9000.0)));
        assert_eq!(LaunchDataset::default().payload_bounds(), None);
    }

    #[test]
    fn total_successes_counts_class_one() {
        assert_eq!(three_launches().total_successes(), 2);
    }

    #[test]
    fn site_selection_round_trips_the_sentinel() {
        assert_eq!(SiteSelection::from("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from("siteA"),
            SiteSelection::Site("siteA".to_string())
        );
        assert_eq!(SiteSelection::All.value(), "ALL");
        assert_eq!(SiteSelection::All.label(), "All Sites");
        assert!(SiteSelection::All.matches("anything"));
        assert!(!SiteSelection::from("siteA").matches("siteB"));
    }

    #[test]
    fn payload_range_is_inclusive_and_rejects_inverted_bounds() {
        let range = PayloadRange::new(5000.0, 5000.0);
        assert!(range.contains(5000.0));
        assert!(!range.contains(4999.9));

        let inverted = PayloadRange::new(6000.0, 1000.0);
        assert!(!inverted.is_valid());
        assert!(!inverted.contains(3000.0));

        assert!(!PayloadRange::new(f64::NAN, 1000.0).is_valid());
    }
}
