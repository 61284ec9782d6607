use std::collections::{BTreeMap, BTreeSet};

use super::model::{Dimension, FilterValue, SalesDataset};

// ---------------------------------------------------------------------------
// Filter selection: which values are selected per dimension
// ---------------------------------------------------------------------------

/// Per-dimension selection state: maps dimension → set of selected values.
/// An empty set (or a missing entry) means "nothing selected" and matches
/// zero rows; it is NOT a wildcard.
pub type FilterSelection = BTreeMap<Dimension, BTreeSet<FilterValue>>;

/// The default selection: every value of every dimension selected.
pub fn select_all(dataset: &SalesDataset) -> FilterSelection {
    Dimension::ALL
        .iter()
        .map(|&dim| (dim, dataset.domain(dim).clone()))
        .collect()
}

/// Return indices of records that pass every dimension filter.
///
/// A record passes a dimension when its value is in the selected set.
/// The result is the conjunction over all six dimensions, so deselecting
/// everything in any one dimension empties the view. When a dimension's
/// selection covers its whole domain the membership test is skipped.
pub fn filtered_indices(dataset: &SalesDataset, selection: &FilterSelection) -> Vec<usize> {
    // An empty selection set empties the view outright.
    for dim in Dimension::ALL {
        if selection.get(&dim).map_or(true, |s| s.is_empty()) {
            return Vec::new();
        }
    }

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            Dimension::ALL.iter().all(|&dim| {
                let selected = &selection[&dim];
                if selected.len() == dataset.domain(dim).len() {
                    return true; // everything selected, no filtering needed
                }
                selected.contains(&rec.dimension_value(dim))
            })
        })
        .map(|(i, _)| i)
        .collect()
}
