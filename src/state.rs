use std::path::{Path, PathBuf};

use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, init_filter_state, FilterState};
use crate::data::loader::{load_file, LoadError};
use crate::data::model::Dataset;

/// Where the decision agent drops its output, relative to the working
/// directory (the agent runs from the parent directory).
pub const DEFAULT_RESULTS_PATH: &str = "../results.csv";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Dataset>,

    /// Current action selection and confidence threshold.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Action → colour, shared by charts and filter checkboxes.
    pub color_map: Option<ColorMap>,

    /// Non-fatal status / error message shown in the top bar.
    pub status_message: Option<String>,

    /// Set when the results file is missing; the UI renders only a
    /// blocking message while this is present.
    pub source_error: Option<String>,

    /// Path of the current results file (target of Reload).
    pub results_path: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            color_map: None,
            status_message: None,
            source_error: None,
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
        }
    }
}

impl AppState {
    /// Run the load + derive stages for `path` and ingest the result.
    pub fn load(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => {
                self.results_path = path.to_path_buf();
                self.set_dataset(dataset);
            }
            Err(e @ LoadError::SourceUnavailable { .. }) => {
                log::error!("{e}");
                self.source_error = Some(e.to_string());
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Reload the current results file from disk.
    pub fn reload(&mut self) {
        let path = self.results_path.clone();
        self.load(&path);
    }

    /// Ingest a newly loaded dataset, initialise filters and colours.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.filters = init_filter_state(&dataset);
        self.color_map = Some(ColorMap::new(&dataset.actions));
        self.visible_indices = filtered_indices(&dataset, &self.filters);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.source_error = None;
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        }
    }

    /// Toggle a single action in the accepted set.
    pub fn toggle_action(&mut self, action: &str) {
        if !self.filters.actions.remove(action) {
            self.filters.actions.insert(action.to_string());
        }
        self.refilter();
    }

    /// Accept every action observed in the dataset.
    pub fn select_all_actions(&mut self) {
        if let Some(ds) = &self.dataset {
            self.filters.actions = ds.actions.clone();
        }
        self.refilter();
    }

    /// Clear the accepted set (hides every record).
    pub fn select_no_actions(&mut self) {
        self.filters.actions.clear();
        self.refilter();
    }

    /// Update the confidence threshold and refilter.
    pub fn set_min_confidence(&mut self, value: f64) {
        self.filters.min_confidence = value;
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{tests::record, Dataset};

    fn state_with_data() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(Dataset::from_records(vec![
            record("BUY", Some(0.9)),
            record("IGNORE", Some(0.3)),
            record("SELL", Some(0.8)),
        ]));
        state
    }

    #[test]
    fn ingest_initialises_filters_and_view() {
        let state = state_with_data();
        // defaults {BUY, IGNORE} ∩ vocabulary, threshold 0.5 → only BUY@0.9
        assert_eq!(state.visible_indices, vec![0]);
        assert!(state.color_map.is_some());
        assert!(state.source_error.is_none());
    }

    #[test]
    fn threshold_change_refilters() {
        let mut state = state_with_data();
        state.set_min_confidence(0.0);
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn toggling_and_select_none_update_the_view() {
        let mut state = state_with_data();
        state.toggle_action("SELL");
        assert_eq!(state.visible_indices, vec![0, 2]);

        state.select_no_actions();
        assert!(state.visible_indices.is_empty());

        state.select_all_actions();
        state.set_min_confidence(0.0);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn missing_results_file_sets_blocking_error() {
        let mut state = AppState::default();
        state.load(Path::new("no/such/results.csv"));
        assert!(state.source_error.is_some());
        assert!(state.dataset.is_none());
    }
}
