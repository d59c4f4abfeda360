mod app;
mod charts;
mod color;
mod config;
mod data;
mod error;
mod layout;
mod state;
mod ui;

use anyhow::Context;
use app::LaunchDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dashboard is useless without data: any load failure ends here.
    let dataset = data::loader::load_csv(&config.data_path, &config.excluded_booster)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let payload = dataset
        .payload_range()
        .context("computing payload range")?;
    log::info!(
        "Loaded {} launches from {} sites {:?}, payload {}–{} kg",
        dataset.len(),
        dataset.sites.len(),
        dataset.sites,
        payload.0,
        payload.1
    );

    let layout = layout::build_layout(
        &config.window_title,
        &dataset,
        &config.slider,
        payload.into(),
    );
    let state = AppState::new(dataset, layout);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    // Native window rather than a local web server; see DESIGN.md.
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI runtime failed: {e}"))
}
