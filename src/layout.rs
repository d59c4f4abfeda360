use crate::charts::{pie_chart, scatter_chart, Figure};
use crate::config::SliderConfig;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection, ALL_SITES};
use crate::error::SelectionError;

// ---------------------------------------------------------------------------
// Widget tree
// ---------------------------------------------------------------------------

/// Input controls that can trigger a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

/// Chart regions filled by callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GraphId {
    SuccessPie,
    SuccessPayloadScatter,
}

impl GraphId {
    pub fn key(self) -> &'static str {
        match self {
            GraphId::SuccessPie => "success-pie-chart",
            GraphId::SuccessPayloadScatter => "success-payload-scatter-chart",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    pub default: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    pub id: ControlId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<(f64, String)>,
    pub default: PayloadRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Heading {
        text: String,
        color: [u8; 3],
        size: f32,
    },
    Dropdown(Dropdown),
    Graph(GraphId),
    Paragraph(String),
    RangeSlider(RangeSlider),
    Break,
}

/// The static page: widgets top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub children: Vec<Widget>,
}

impl Layout {
    pub fn dropdown(&self) -> Option<&Dropdown> {
        self.children.iter().find_map(|w| match w {
            Widget::Dropdown(d) => Some(d),
            _ => None,
        })
    }

    pub fn range_slider(&self) -> Option<&RangeSlider> {
        self.children.iter().find_map(|w| match w {
            Widget::RangeSlider(s) => Some(s),
            _ => None,
        })
    }

    /// Control values the page starts with.
    pub fn default_selection(&self) -> Selection {
        Selection {
            site: self.dropdown().map(|d| d.default.clone()).unwrap_or_default(),
            payload: self
                .range_slider()
                .map(|s| s.default)
                .unwrap_or(PayloadRange::new(0.0, 0.0)),
        }
    }
}

/// Current values of every input control.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

/// Declare the dashboard page.
///
/// `default_payload` is the observed payload span of the dataset; the slider
/// starts there even when it is not on a step boundary.
pub fn build_layout(
    title: &str,
    dataset: &LaunchDataset,
    slider: &SliderConfig,
    default_payload: PayloadRange,
) -> Layout {
    let mut options = vec![DropdownOption {
        label: SiteSelection::All.to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(dataset.sites.iter().map(|s| DropdownOption {
        label: s.clone(),
        value: s.clone(),
    }));

    Layout {
        children: vec![
            Widget::Heading {
                text: title.to_string(),
                color: [0x50, 0x3D, 0x36],
                size: 40.0,
            },
            Widget::Dropdown(Dropdown {
                id: ControlId::SiteDropdown,
                options,
                default: SiteSelection::All,
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            }),
            Widget::Break,
            Widget::Graph(GraphId::SuccessPie),
            Widget::Break,
            Widget::Paragraph("Payload range (Kg):".to_string()),
            Widget::RangeSlider(RangeSlider {
                id: ControlId::PayloadSlider,
                min: slider.min,
                max: slider.max,
                step: slider.step,
                marks: slider.marks.iter().map(|&m| (m, format!("{m}"))).collect(),
                default: default_payload,
            }),
            Widget::Break,
            Widget::Graph(GraphId::SuccessPayloadScatter),
        ],
    }
}

// ---------------------------------------------------------------------------
// Callback table
// ---------------------------------------------------------------------------

pub type Handler = fn(&LaunchDataset, &Selection) -> Result<Figure, SelectionError>;

/// Recompute `output` with `handler` whenever one of `inputs` changes.
#[derive(Clone, Copy)]
pub struct Callback {
    pub output: GraphId,
    pub inputs: &'static [ControlId],
    pub handler: Handler,
}

impl Callback {
    pub fn triggered_by(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }
}

fn success_pie(dataset: &LaunchDataset, sel: &Selection) -> Result<Figure, SelectionError> {
    pie_chart(dataset, &sel.site).map(Figure::Pie)
}

fn success_payload_scatter(
    dataset: &LaunchDataset,
    sel: &Selection,
) -> Result<Figure, SelectionError> {
    scatter_chart(dataset, &sel.site, sel.payload).map(Figure::Scatter)
}

pub fn callbacks() -> [Callback; 2] {
    [
        Callback {
            output: GraphId::SuccessPie,
            inputs: &[ControlId::SiteDropdown],
            handler: success_pie,
        },
        Callback {
            output: GraphId::SuccessPayloadScatter,
            inputs: &[ControlId::SiteDropdown, ControlId::PayloadSlider],
            handler: success_payload_scatter,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::three_rows;

    fn layout() -> Layout {
        let ds = three_rows();
        build_layout(
            "Launches",
            &ds,
            &SliderConfig::default(),
            PayloadRange::new(3000.0, 6000.0),
        )
    }

    #[test]
    fn dropdown_lists_sentinel_then_sites() {
        let layout = layout();
        let dropdown = layout.dropdown().unwrap();
        let values: Vec<&str> = dropdown.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["ALL", "Site A", "Site B"]);
        assert_eq!(dropdown.options[0].label, "All Sites");
        assert_eq!(dropdown.default, SiteSelection::All);
    }

    #[test]
    fn slider_has_fixed_domain_and_observed_default() {
        let layout = layout();
        let slider = layout.range_slider().unwrap();
        assert_eq!((slider.min, slider.max, slider.step), (0.0, 10000.0, 1000.0));
        assert_eq!(slider.marks.len(), 5);
        assert_eq!(slider.marks[2], (5000.0, "5000".to_string()));
        assert_eq!(
            layout.default_selection(),
            Selection {
                site: SiteSelection::All,
                payload: PayloadRange::new(3000.0, 6000.0),
            }
        );
    }

    #[test]
    fn graphs_appear_in_page_order() {
        let graphs: Vec<GraphId> = layout()
            .children
            .iter()
            .filter_map(|w| match w {
                Widget::Graph(g) => Some(*g),
                _ => None,
            })
            .collect();
        assert_eq!(graphs, vec![GraphId::SuccessPie, GraphId::SuccessPayloadScatter]);
    }

    #[test]
    fn slider_only_drives_the_scatter_chart() {
        let triggered: Vec<GraphId> = callbacks()
            .iter()
            .filter(|c| c.triggered_by(ControlId::PayloadSlider))
            .map(|c| c.output)
            .collect();
        assert_eq!(triggered, vec![GraphId::SuccessPayloadScatter]);
        assert!(callbacks().iter().all(|c| c.triggered_by(ControlId::SiteDropdown)));
    }

    #[test]
    fn handlers_produce_their_chart_kind() {
        let ds = three_rows();
        let sel = layout().default_selection();
        for cb in callbacks() {
            let fig = (cb.handler)(&ds, &sel).unwrap();
            match cb.output {
                GraphId::SuccessPie => assert!(matches!(fig, Figure::Pie(_))),
                GraphId::SuccessPayloadScatter => assert_eq!(fig.len(), 3),
            }
        }
    }
}
