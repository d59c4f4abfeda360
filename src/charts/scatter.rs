use serde::Serialize;

use crate::data::filter::{by_site_and_payload, check_range, check_site};
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};
use crate::error::SelectionError;

/// One launch on the payload/outcome plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    /// Colour key.
    pub booster_version_category: String,
    // Hover data
    pub launch_site: String,
    pub booster_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    /// Distinct booster categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for p in &self.points {
            if !out.contains(&p.booster_version_category.as_str()) {
                out.push(&p.booster_version_category);
            }
        }
        out
    }

    /// The point of `category` nearest to `(x, y)`, for hover labels.
    pub fn nearest(&self, category: &str, x: f64, y: f64) -> Option<&ScatterPoint> {
        self.points
            .iter()
            .filter(|p| p.booster_version_category == category)
            .min_by(|a, b| {
                let da = (a.payload_mass_kg - x).abs() + (f64::from(a.class) - y).abs();
                let db = (b.payload_mass_kg - x).abs() + (f64::from(b.class) - y).abs();
                da.total_cmp(&db)
            })
    }
}

/// Payload vs. outcome for launches at `site` within `range`.
///
/// An empty selection yields a chart with no points, not an error.
pub fn scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Result<ScatterChart, SelectionError> {
    check_site(dataset, site)?;
    check_range(range)?;

    let points = by_site_and_payload(dataset, site, range)
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            class: r.class,
            booster_version_category: r.booster_version_category.clone(),
            launch_site: r.launch_site.clone(),
            booster_version: r.booster_version.clone(),
        })
        .collect();

    let title = match site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Outcome for site {name}"),
    };

    Ok(ScatterChart {
        title,
        x_label: "payload mass (kg)".to_string(),
        y_label: "class".to_string(),
        points,
    })
}
