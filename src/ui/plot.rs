use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::data::transform::PieChartData;
use crate::state::AppState;

/// Arc vertices per full turn of the pie.
const ARC_SEGMENTS: f64 = 180.0;

/// Radius at which the percentage labels are placed.
const LABEL_RADIUS: f64 = 0.65;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Render the success pie for the current site selection.
pub fn pie_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let pie = &state.charts.pie;
    ui.heading(&pie.title);

    if pie.is_empty() || pie.total() == 0 {
        ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label("No successful or failed launches for this selection.");
            });
        });
        return;
    }

    Plot::new("success_pie_chart")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for slice in pie_slices(pie) {
                let color = state.pie_color(&slice.label);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(slice.outline))
                        .name(&slice.label)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
                let [x, y] = slice.label_pos;
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(format!("{:.1}%", slice.fraction * 100.0)).strong(),
                ));
            }
        });
}

/// Geometry of one drawn pie slice.
#[derive(Debug, Clone)]
struct SliceShape {
    label: String,
    fraction: f64,
    outline: Vec<[f64; 2]>,
    label_pos: [f64; 2],
}

/// Lay out the non-empty slices on a unit circle, starting at twelve
/// o'clock and running clockwise.
fn pie_slices(pie: &PieChartData) -> Vec<SliceShape> {
    let total = f64::from(pie.total());
    if total == 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    let mut shapes = Vec::new();
    for slice in pie.slices.iter().filter(|s| s.count > 0) {
        let fraction = f64::from(slice.count) / total;
        let end = start + fraction;
        let mid = angle_at(start + fraction / 2.0);
        shapes.push(SliceShape {
            label: slice.label.clone(),
            fraction,
            outline: slice_outline(start, end),
            label_pos: [LABEL_RADIUS * mid.cos(), LABEL_RADIUS * mid.sin()],
        });
        start = end;
    }
    shapes
}

fn angle_at(turn: f64) -> f64 {
    FRAC_PI_2 - TAU * turn
}

/// Closed outline: centre, then the arc from `start` to `end` (in turns).
fn slice_outline(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = (((end - start) * ARC_SEGMENTS).ceil() as usize).max(2);
    let mut outline = Vec::with_capacity(steps + 2);
    outline.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = angle_at(start + (end - start) * i as f64 / steps as f64);
        outline.push([a.cos(), a.sin()]);
    }
    outline
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render payload vs. outcome, coloured by booster version category.
pub fn scatter_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let scatter = &state.charts.scatter;
    ui.heading(&scatter.title);

    Plot::new("success_payload_scatter_chart")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for category in state.dataset().booster_categories() {
                let points: Vec<[f64; 2]> = scatter
                    .points
                    .iter()
                    .filter(|p| p.booster_version_category == *category)
                    .map(|p| [p.payload_mass_kg, f64::from(p.outcome_class)])
                    .collect();
                if points.is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}
