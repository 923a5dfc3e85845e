use eframe::egui::{self, Color32, RichText, Slider, SliderClamping, Ui};

use crate::data::model::{PayloadRange, SiteSelection};
use crate::state::AppState;

/// Displayed slider span and step. Values outside it are kept, not clamped.
const SLIDER_MIN: f64 = 0.0;
const SLIDER_MAX: f64 = 10_000.0;
const SLIDER_STEP: f64 = 1_000.0;

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Site");
    ui.separator();
    site_dropdown(ui, state);

    ui.add_space(12.0);
    ui.heading("Payload range (kg)");
    ui.separator();
    payload_sliders(ui, state);
}

fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let options: Vec<SiteSelection> = std::iter::once(SiteSelection::All)
        .chain(
            state
                .dataset()
                .sites()
                .iter()
                .map(|s| SiteSelection::Site(s.clone())),
        )
        .collect();

    let mut chosen = state.site.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(chosen.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                let label = option.label().to_string();
                ui.selectable_value(&mut chosen, option, label);
            }
        });
    state.set_site(chosen);
}

fn payload_sliders(ui: &mut Ui, state: &mut AppState) {
    let PayloadRange { mut low, mut high } = state.range;

    ui.add(payload_slider(&mut low).text("Low"));
    ui.add(payload_slider(&mut high).text("High"));
    state.set_range(PayloadRange::new(low, high));

    if ui.button("Reset range").clicked() {
        state.reset_range();
    }

    if !state.range.is_valid() {
        ui.label(RichText::new("Low is above high: no launches shown.").color(Color32::RED));
    }
}

fn payload_slider(value: &mut f64) -> Slider<'_> {
    Slider::new(value, SLIDER_MIN..=SLIDER_MAX)
        .step_by(SLIDER_STEP)
        .clamping(SliderClamping::Never)
        .suffix(" kg")
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("View", |ui: &mut Ui| {
            ui.checkbox(&mut state.show_records, "Records table");
        });

        ui.separator();

        let dataset = state.dataset();
        ui.label(format!(
            "{} launches loaded ({} successful), {} in range",
            dataset.len(),
            dataset.total_successes(),
            state.charts.scatter.points.len()
        ));

        ui.separator();

        ui.label(RichText::new(&state.source).weak());
    });
}
