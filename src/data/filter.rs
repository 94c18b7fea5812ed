use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter predicate: accepted actions AND minimum confidence
// ---------------------------------------------------------------------------

/// Current filter selections: which actions are accepted and the minimum
/// confidence a record must reach.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Accepted `action` values. An empty set hides everything (deliberate:
    /// "nothing selected" is not "no filter").
    pub actions: BTreeSet<String>,
    /// Records need `confidence >= min_confidence` to pass.
    pub min_confidence: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        // The two most common labels in agent output; overridden against the
        // observed vocabulary in init_filter_state.
        FilterState {
            actions: ["BUY", "IGNORE"].iter().map(|s| s.to_string()).collect(),
            min_confidence: 0.5,
        }
    }
}

/// Initialise a [`FilterState`] for a freshly loaded dataset.
///
/// Starts from the default selection intersected with the vocabulary the
/// data actually uses; when none of the defaults occur, every observed
/// action starts selected so the first render is never accidentally empty.
pub fn init_filter_state(dataset: &Dataset) -> FilterState {
    let mut state = FilterState::default();
    state.actions = state
        .actions
        .intersection(&dataset.actions)
        .cloned()
        .collect();
    if state.actions.is_empty() {
        state.actions = dataset.actions.clone();
    }
    state
}

/// Return indices of records passing both predicates.
///
/// A record passes when its action is in the accepted set AND its
/// confidence is present and `>= min_confidence`; a missing confidence
/// fails the comparison rather than raising an error.
pub fn filtered_indices(dataset: &Dataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            filters.actions.contains(&rec.action)
                && rec
                    .confidence
                    .is_some_and(|c| c >= filters.min_confidence)
        })
        .map(|(i, _)| i)
        .collect()
}
