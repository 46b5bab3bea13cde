//! Option Providers
//!
//! Derives the selectable values for the three dashboard inputs from the
//! loaded dataset. All of these are pure reads; nothing here mutates state.

use std::collections::{BTreeSet, HashSet};

use crate::dataset::Dataset;

/// Distinct state names, lexically sorted ascending
pub fn state_options(dataset: &Dataset) -> Vec<String> {
    let states: BTreeSet<&str> = dataset
        .records()
        .iter()
        .map(|r| r.state.as_str())
        .collect();

    states.into_iter().map(String::from).collect()
}

/// Distinct county names belonging to any of the selected states, lexically sorted
///
/// Returns an empty list when no state is selected: the county input offers
/// nothing until the user narrows by state.
pub fn county_options(dataset: &Dataset, selected_states: &[String]) -> Vec<String> {
    if selected_states.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<&str> = selected_states.iter().map(String::as_str).collect();

    let counties: BTreeSet<&str> = dataset
        .records()
        .iter()
        .filter(|r| wanted.contains(r.state.as_str()))
        .map(|r| r.county.as_str())
        .collect();

    counties.into_iter().map(String::from).collect()
}

/// Distinct date strings in the order they first appear in the dataset
///
/// No sort is applied here; the dashboard offers dates in file order.
pub fn date_options(dataset: &Dataset) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dates = Vec::new();

    for record in dataset.records() {
        if seen.insert(record.date.as_str()) {
            dates.push(record.date.clone());
        }
    }

    dates
}
