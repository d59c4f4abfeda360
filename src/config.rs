use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Fixed settings the dashboard starts with.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV read once at startup.
    pub data_path: PathBuf,
    /// Booster version whose launches are removed on load.
    pub excluded_booster: String,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub slider: SliderConfig,
}

/// Domain and ticks of the payload range slider, in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            excluded_booster: "Falcon 1".to_string(),
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1100.0, 900.0],
            min_window_size: [600.0, 500.0],
            slider: SliderConfig::default(),
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
            step: 1000.0,
            marks: vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0],
        }
    }
}
