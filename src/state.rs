use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};
use crate::data::transform::{ChartData, FAILURE_LABEL, PieKind, SUCCESS_LABEL, chart_data};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the dataset came from, shown in the top bar.
    pub source: String,

    /// Loaded once at startup and never modified.
    dataset: LaunchDataset,

    /// Current dropdown value.
    pub site: SiteSelection,

    /// Current slider value.
    pub range: PayloadRange,

    /// Chart data for the current `site` / `range`.
    pub charts: ChartData,

    /// Pie slice colours, keyed by launch site.
    pub site_colors: ColorMap,

    /// Pie slice colours for a single site's Success / Failure split.
    pub outcome_colors: ColorMap,

    /// Scatter colours, keyed by booster version category.
    pub booster_colors: ColorMap,

    /// Whether the records table is shown below the charts.
    pub show_records: bool,
}

impl AppState {
    /// Build the state for a freshly loaded dataset and compute the first charts.
    pub fn new(
        source: String,
        dataset: LaunchDataset,
        site: SiteSelection,
        range: PayloadRange,
    ) -> Self {
        let site_colors = ColorMap::new(dataset.sites().iter().map(String::as_str));
        let booster_colors = ColorMap::new(dataset.booster_categories().iter().map(String::as_str));
        let outcome_colors = ColorMap::new([FAILURE_LABEL, SUCCESS_LABEL]);
        let charts = chart_data(&dataset, &site, range);
        Self {
            source,
            dataset,
            site,
            range,
            charts,
            site_colors,
            outcome_colors,
            booster_colors,
            show_records: true,
        }
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    /// The slider's initial value: the data's own payload bounds.
    pub fn default_range(&self) -> PayloadRange {
        default_range(&self.dataset)
    }

    /// Change the dropdown value. Recomputes only if it changed.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site != self.site {
            self.site = site;
            self.recompute();
        }
    }

    /// Change the slider value. Recomputes only if it changed.
    pub fn set_range(&mut self, range: PayloadRange) {
        if range != self.range {
            self.range = range;
            self.recompute();
        }
    }

    pub fn reset_range(&mut self) {
        self.set_range(self.default_range());
    }

    /// Colour of a pie slice for the current pie kind.
    pub fn pie_color(&self, label: &str) -> Color32 {
        match self.charts.pie.kind {
            PieKind::SuccessesBySite => self.site_colors.color_for(label),
            PieKind::OutcomeSplit => self.outcome_colors.color_for(label),
        }
    }

    /// Rebuild both charts from the dataset for the current controls.
    pub fn recompute(&mut self) {
        self.charts = chart_data(&self.dataset, &self.site, self.range);
    }
}

/// `[min, max]` payload of the dataset, `[0, 0]` when it is empty.
pub fn default_range(dataset: &LaunchDataset) -> PayloadRange {
    dataset
        .payload_bounds()
        .unwrap_or(PayloadRange::new(0.0, 0.0))
}
