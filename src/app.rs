use eframe::egui::{self, ScrollArea, Ui};

use crate::layout::Widget;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Bottom panel: status bar ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: the page, top to bottom ----
        // Clone the tree so widgets can mutate state while we walk it.
        let children = self.state.layout.children.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for widget in &children {
                        self.widget(ui, widget);
                    }
                });
        });
    }
}

impl LaunchDashApp {
    fn widget(&mut self, ui: &mut Ui, widget: &Widget) {
        match widget {
            Widget::Heading { text, color, size } => panels::heading(ui, text, *color, *size),
            Widget::Dropdown(dropdown) => panels::site_dropdown(ui, dropdown, &mut self.state),
            Widget::Graph(id) => plot::graph(
                ui,
                *id,
                self.state.figure(*id),
                &self.state.category_colors,
            ),
            Widget::Paragraph(text) => {
                ui.label(text);
            }
            Widget::RangeSlider(slider) => panels::payload_slider(ui, slider, &mut self.state),
            Widget::Break => ui.add_space(12.0),
        }
    }
}
