use std::collections::BTreeMap;

use crate::charts::Figure;
use crate::color::ColorMap;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};
use crate::error::SelectionError;
use crate::layout::{callbacks, ControlId, GraphId, Handler, Layout, Selection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset loaded at startup; never mutated afterwards.
    pub dataset: LaunchDataset,

    /// Static page declaration.
    pub layout: Layout,

    /// Current control values.
    pub selection: Selection,

    /// Latest output of each graph's callback.
    pub figures: BTreeMap<GraphId, Result<Figure, SelectionError>>,

    /// Booster category colours, built over the whole dataset.
    pub category_colors: ColorMap,

    /// Search text typed into the site dropdown.
    pub site_query: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Take ownership of the dataset and render every graph once.
    pub fn new(dataset: LaunchDataset, layout: Layout) -> Self {
        let selection = layout.default_selection();
        let category_colors = ColorMap::new(
            dataset
                .records
                .iter()
                .map(|r| r.booster_version_category.as_str()),
        );

        let mut state = Self {
            dataset,
            layout,
            selection,
            figures: BTreeMap::new(),
            category_colors,
            site_query: String::new(),
            status_message: None,
        };
        for cb in callbacks() {
            state.run(cb.output, cb.handler);
        }
        state
    }

    /// Change the site dropdown; no-op if unchanged.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.selection.site != site {
            self.selection.site = site;
            self.on_change(ControlId::SiteDropdown);
        }
    }

    /// Change the payload slider; no-op if unchanged.
    pub fn set_payload(&mut self, payload: PayloadRange) {
        if self.selection.payload != payload {
            self.selection.payload = payload;
            self.on_change(ControlId::PayloadSlider);
        }
    }

    /// Re-run every callback wired to `control`.
    pub fn on_change(&mut self, control: ControlId) {
        self.status_message = None;
        for cb in callbacks().into_iter().filter(|c| c.triggered_by(control)) {
            self.run(cb.output, cb.handler);
        }
    }

    pub fn figure(&self, graph: GraphId) -> Option<&Result<Figure, SelectionError>> {
        self.figures.get(&graph)
    }

    fn run(&mut self, output: GraphId, handler: Handler) {
        let result = handler(&self.dataset, &self.selection);
        match &result {
            Ok(fig) => {
                log::debug!("{}: '{}' with {} items", output.key(), fig.title(), fig.len());
                if log::log_enabled!(log::Level::Trace) {
                    match fig.to_json() {
                        Ok(json) => log::trace!("{}: {json}", output.key()),
                        Err(e) => log::warn!("{}: cannot serialize figure: {e}", output.key()),
                    }
                }
            }
            Err(e) => {
                log::warn!("{}: {e}", output.key());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        self.figures.insert(output, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::data::model::tests::three_rows;
    use crate::layout::build_layout;

    fn state() -> AppState {
        let ds = three_rows();
        let range = ds.payload_range().unwrap().into();
        let layout = build_layout("Launches", &ds, &SliderConfig::default(), range);
        AppState::new(ds, layout)
    }

    fn scatter_len(state: &AppState) -> usize {
        match state.figure(GraphId::SuccessPayloadScatter) {
            Some(Ok(Figure::Scatter(s))) => s.points.len(),
            other => panic!("unexpected scatter figure: {other:?}"),
        }
    }

    #[test]
    fn startup_renders_both_graphs() {
        let state = state();
        assert_eq!(state.figures.len(), 2);
        assert_eq!(scatter_len(&state), 3);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn slider_change_refreshes_scatter_only() {
        let mut state = state();
        let pie_before = state.figure(GraphId::SuccessPie).cloned();
        state.set_payload(PayloadRange::new(3500.0, 6500.0));
        assert_eq!(scatter_len(&state), 2);
        state.set_payload(PayloadRange::new(5000.0, 6500.0));
        assert_eq!(scatter_len(&state), 1);
        assert_eq!(state.figure(GraphId::SuccessPie).cloned(), pie_before);
    }

    #[test]
    fn site_change_refreshes_both() {
        let mut state = state();
        state.set_site(SiteSelection::Site("Site B".into()));
        assert_eq!(scatter_len(&state), 1);
        match state.figure(GraphId::SuccessPie) {
            Some(Ok(fig)) => assert_eq!(fig.title(), "Success vs Failure for site Site B"),
            other => panic!("unexpected pie figure: {other:?}"),
        }
    }

    #[test]
    fn invalid_site_is_surfaced_not_defaulted() {
        let mut state = state();
        state.set_site(SiteSelection::Site("Nowhere".into()));
        assert!(matches!(
            state.figure(GraphId::SuccessPie),
            Some(Err(SelectionError::InvalidSelection(_)))
        ));
        assert!(state.status_message.is_some());
    }
}
