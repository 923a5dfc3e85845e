use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::transform::{FAILURE_LABEL, SUCCESS_LABEL};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Table of the launches currently shown in the scatter chart.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let points = &state.charts.scatter.points;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui| {
                ui.strong("Payload Mass (kg)");
            });
            header.col(|ui| {
                ui.strong("Outcome");
            });
            header.col(|ui| {
                ui.strong("Booster Version Category");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, points.len(), |mut row| {
                let point = &points[row.index()];
                row.col(|ui| {
                    ui.label(format!("{:.0}", point.payload_mass_kg));
                });
                row.col(|ui| {
                    let outcome = if point.outcome_class == 1 { SUCCESS_LABEL } else { FAILURE_LABEL };
                    ui.label(outcome);
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(&point.booster_version_category)
                            .color(state.booster_colors.color_for(&point.booster_version_category)),
                    );
                });
            });
        });
}
