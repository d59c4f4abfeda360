use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Slider, Ui};

use crate::data::model::{PayloadRange, SiteSelection};
use crate::layout::{Dropdown, RangeSlider};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Static text
// ---------------------------------------------------------------------------

pub fn heading(ui: &mut Ui, text: &str, color: [u8; 3], size: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(text)
                .size(size)
                .strong()
                .color(Color32::from_rgb(color[0], color[1], color[2])),
        );
    });
}

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

/// Render the site selector; a click on an option updates the selection.
pub fn site_dropdown(ui: &mut Ui, dropdown: &Dropdown, state: &mut AppState) {
    let current = state.selection.site.value().to_string();
    let selected_text = dropdown
        .options
        .iter()
        .find(|o| o.value == current)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| dropdown.placeholder.clone());

    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if dropdown.searchable {
                ui.add(
                    egui::TextEdit::singleline(&mut state.site_query)
                        .hint_text(dropdown.placeholder.as_str()),
                );
                ui.separator();
            }

            let query = state.site_query.to_lowercase();
            for opt in &dropdown.options {
                if !query.is_empty() && !opt.label.to_lowercase().contains(&query) {
                    continue;
                }
                if ui
                    .selectable_label(opt.value == current, opt.label.as_str())
                    .clicked()
                {
                    state.set_site(SiteSelection::from_value(&opt.value));
                    state.site_query.clear();
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Payload range slider
// ---------------------------------------------------------------------------

/// Two linked sliders acting as one range control. Dragging one end past
/// the other pushes it along.
pub fn payload_slider(ui: &mut Ui, slider: &RangeSlider, state: &mut AppState) {
    let PayloadRange { mut low, mut high } = state.selection.payload;
    let before = (low, high);

    let width = ui.available_width();
    ui.spacing_mut().slider_width = (width - 120.0).max(100.0);

    let low_changed = ui
        .add(
            Slider::new(&mut low, slider.min..=slider.max)
                .step_by(slider.step)
                .text("from"),
        )
        .changed();
    let high_changed = ui
        .add(
            Slider::new(&mut high, slider.min..=slider.max)
                .step_by(slider.step)
                .text("to"),
        )
        .changed();

    if low > high {
        if low_changed {
            high = low;
        } else if high_changed {
            low = high;
        }
    }

    let marks_width = ui.spacing().slider_width;
    marks(ui, slider, marks_width);

    if (low, high) != before {
        state.set_payload(PayloadRange::new(low, high));
    }
}

/// Tick labels under the sliders.
fn marks(ui: &mut Ui, slider: &RangeSlider, width: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 16.0), Sense::hover());
    let span = slider.max - slider.min;
    if span <= 0.0 {
        return;
    }
    let color = ui.visuals().weak_text_color();
    for (value, label) in &slider.marks {
        let t = ((value - slider.min) / span) as f32;
        let pos = egui::pos2(rect.left() + t * rect.width(), rect.top());
        ui.painter()
            .text(pos, Align2::CENTER_TOP, label, FontId::proportional(11.0), color);
    }
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} launches, {} sites",
            state.dataset.len(),
            state.dataset.sites.len()
        ));
        ui.separator();
        ui.label(format!("Site: {}", state.selection.site));
        ui.separator();
        ui.label(format!(
            "Payload: {} – {} kg",
            state.selection.payload.low, state.selection.payload.high
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
