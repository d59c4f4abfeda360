//! Chart handlers: pure functions from (dataset, selection) to a chart
//! description the UI can draw. Nothing here touches egui.

pub mod pie;
pub mod scatter;

use serde::Serialize;

pub use pie::{pie_chart, PieChart};
pub use scatter::{scatter_chart, ScatterChart};

/// Output of any chart handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(p) => &p.title,
            Figure::Scatter(s) => &s.title,
        }
    }

    /// Slice or point count, for logging.
    pub fn len(&self) -> usize {
        match self {
            Figure::Pie(p) => p.slices.len(),
            Figure::Scatter(s) => s.points.len(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::three_rows;
    use crate::data::model::SiteSelection;

    #[test]
    fn figure_json_is_tagged_by_chart_type() {
        let ds = three_rows();
        let fig = Figure::Pie(pie_chart(&ds, &SiteSelection::All).unwrap());
        let json: serde_json::Value = serde_json::from_str(&fig.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "pie");
        assert_eq!(json["title"], "Total Success Launches by Site");
        assert_eq!(json["slices"][0]["label"], "Site A");
    }
}
