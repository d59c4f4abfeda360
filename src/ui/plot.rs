use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::charts::{Figure, PieChart, ScatterChart};
use crate::color::{generate_palette, ColorMap};
use crate::error::SelectionError;
use crate::layout::GraphId;

const GRAPH_HEIGHT: f32 = 360.0;

/// Render whatever the graph's callback last produced.
pub fn graph(
    ui: &mut Ui,
    id: GraphId,
    figure: Option<&Result<Figure, SelectionError>>,
    category_colors: &ColorMap,
) {
    match figure {
        Some(Ok(Figure::Pie(chart))) => pie_plot(ui, id, chart),
        Some(Ok(Figure::Scatter(chart))) => scatter_plot(ui, id, chart, category_colors),
        Some(Err(e)) => {
            ui.label(RichText::new(format!("{}: {e}", id.key())).color(Color32::RED));
        }
        None => {
            ui.label("Loading…");
        }
    }
}

fn title(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(18.0).strong());
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Points outlining one wedge of the unit circle, clockwise from `start`.
fn wedge(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = ((sweep / TAU) * 120.0).ceil().max(2.0) as usize;
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = start - sweep * (i as f64 / steps as f64);
        pts.push([a.cos(), a.sin()]);
    }
    pts
}

fn pie_plot(ui: &mut Ui, id: GraphId, chart: &PieChart) {
    title(ui, &chart.title);

    let total = chart.total();
    if total <= 0.0 {
        ui.label("No launches to show.");
        return;
    }
    let colors = generate_palette(chart.slices.len());

    Plot::new(id.key())
        .height(GRAPH_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            // Start at twelve o'clock and go clockwise.
            let mut angle = FRAC_PI_2;
            for (slice, color) in chart.slices.iter().zip(colors) {
                if slice.value <= 0.0 {
                    continue;
                }
                let sweep = slice.value / total * TAU;
                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(wedge(angle, sweep)))
                        .name(&slice.label)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = angle - sweep / 2.0;
                let share = slice.value / total * 100.0;
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()),
                        format!("{share:.1}%"),
                    )
                    .color(Color32::WHITE),
                );
                angle -= sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, id: GraphId, chart: &ScatterChart, category_colors: &ColorMap) {
    title(ui, &chart.title);

    Plot::new(id.key())
        .height(GRAPH_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .include_y(-0.25)
        .include_y(1.25)
        .label_formatter(|name, value| match chart.nearest(name, value.x, value.y) {
            Some(p) => format!(
                "{}\n{}\n{} kg, class {}",
                p.launch_site, p.booster_version, p.payload_mass_kg, p.class
            ),
            None => format!("{:.0} kg, class {:.2}", value.x, value.y),
        })
        .show(ui, |plot_ui| {
            for category in chart.categories() {
                let points: PlotPoints = chart
                    .points
                    .iter()
                    .filter(|p| p.booster_version_category == category)
                    .map(|p| [p.payload_mass_kg, f64::from(p.class)])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(category_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}
