use std::collections::BTreeSet;
use std::path::Path;

use crate::dashboard::{self, Dashboard};
use crate::data::filter::{select_all, FilterSelection};
use crate::data::loader;
use crate::data::model::{Dimension, FilterValue, SalesDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering. The dataset is loaded
/// once and read-only afterwards; everything else derives from it and the
/// current filter selection.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None if the source file could not be read).
    pub dataset: Option<SalesDataset>,

    /// Per-dimension filter selections.
    pub filters: FilterSelection,

    /// Derived page content for the current selection (cached).
    pub dashboard: Dashboard,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load the sales table from `path` and reset filters to all-selected.
    /// On failure the previous dataset is kept and the error is surfaced in
    /// the status line.
    pub fn load_dataset(&mut self, path: &Path) {
        match loader::load_csv(path) {
            Ok(dataset) => {
                log::info!("Loaded {} sales records from {}", dataset.len(), path.display());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and initialise the selection.
    pub fn set_dataset(&mut self, dataset: SalesDataset) {
        self.filters = select_all(&dataset);
        self.dashboard = dashboard::render(&dataset, &self.filters);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute the dashboard after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.dashboard = dashboard::render(ds, &self.filters);
        }
    }

    /// Toggle a single value in a dimension's selection.
    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &FilterValue) {
        let selected = self.filters.entry(dim).or_default();
        if selected.contains(value) {
            selected.remove(value);
        } else {
            selected.insert(value.clone());
        }
        self.refilter();
    }

    /// Select every value of a dimension.
    pub fn select_all_values(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            let all = ds.domain(dim).clone();
            self.filters.insert(dim, all);
            self.refilter();
        }
    }

    /// Deselect every value of a dimension (empties the view).
    pub fn select_no_values(&mut self, dim: Dimension) {
        self.filters.insert(dim, BTreeSet::new());
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::three_row_dataset;

    #[test]
    fn set_dataset_selects_everything() {
        let mut state = AppState::default();
        state.set_dataset(three_row_dataset());

        assert_eq!(state.dashboard.indices.len(), 3);
        for dim in Dimension::ALL {
            let ds = state.dataset.as_ref().unwrap();
            assert_eq!(state.filters[&dim].len(), ds.domain(dim).len());
        }
    }

    #[test]
    fn toggling_a_value_refilters() {
        let mut state = AppState::default();
        state.set_dataset(three_row_dataset());

        // Deselect 2021: only the two 2020 rows remain.
        state.toggle_filter_value(Dimension::Year, &FilterValue::Int(2021));
        assert_eq!(state.dashboard.indices, vec![0, 2]);

        // Toggle it back: full view again.
        state.toggle_filter_value(Dimension::Year, &FilterValue::Int(2021));
        assert_eq!(state.dashboard.indices.len(), 3);
    }

    #[test]
    fn select_none_then_all_round_trips() {
        let mut state = AppState::default();
        state.set_dataset(three_row_dataset());

        state.select_no_values(Dimension::Region);
        assert!(state.dashboard.indices.is_empty());
        assert_eq!(state.dashboard.kpis.top_model_label(), "N/A");

        state.select_all_values(Dimension::Region);
        assert_eq!(state.dashboard.indices.len(), 3);
    }
}
