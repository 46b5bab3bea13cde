//! Filter/Aggregate Engine
//!
//! Turns a user selection into chart-ready rows:
//!
//! 1. Filter records to those matching state AND county AND date
//! 2. Group by (state, county, date) in first-encounter order
//! 3. Sum cases and deaths within each group
//! 4. Unpivot each group into one row per metric
//!
//! A selection with any empty field returns `None`, the "no update" sentinel:
//! the caller leaves the previous chart untouched. A complete selection that
//! matches nothing returns `Some(vec![])`, which renders as an empty chart.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::dataset::Dataset;

/// The user's current filter choice across state, county, and date
///
/// Fields are lists rather than sets so they deserialize straight from the
/// dashboard page; membership tests treat them as sets, so duplicates are
/// harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected state names
    #[serde(default)]
    pub states: Vec<String>,
    /// Selected county names
    #[serde(default)]
    pub counties: Vec<String>,
    /// Selected date strings
    #[serde(default)]
    pub dates: Vec<String>,
}

impl Selection {
    /// Create a selection from the three value lists
    pub fn new(states: Vec<String>, counties: Vec<String>, dates: Vec<String>) -> Self {
        Self {
            states,
            counties,
            dates,
        }
    }

    /// True when all three fields have at least one value
    pub fn is_complete(&self) -> bool {
        !self.states.is_empty() && !self.counties.is_empty() && !self.dates.is_empty()
    }
}

/// The metric a chart row carries after unpivoting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Cases,
    Deaths,
}

impl Metric {
    /// Both metrics, in unpivot order
    pub fn all() -> &'static [Metric] {
        &[Metric::Cases, Metric::Deaths]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Cases => write!(f, "cases"),
            Metric::Deaths => write!(f, "deaths"),
        }
    }
}

/// One post-aggregation, post-unpivot row consumed by the chart renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedRow {
    /// State of the group
    pub state: String,
    /// County of the group
    pub county: String,
    /// Date of the group
    pub date: String,
    /// Which metric this row carries
    pub metric: Metric,
    /// Summed value of that metric over the group
    pub value: u64,
}

/// Filter, group, sum, and unpivot the dataset for a selection
///
/// Returns `None` unless all three selection fields are non-empty; partial
/// selections never produce a partial chart.
pub fn aggregate(dataset: &Dataset, selection: &Selection) -> Option<Vec<AggregatedRow>> {
    if !selection.is_complete() {
        return None;
    }

    let states: HashSet<&str> = selection.states.iter().map(String::as_str).collect();
    let counties: HashSet<&str> = selection.counties.iter().map(String::as_str).collect();
    let dates: HashSet<&str> = selection.dates.iter().map(String::as_str).collect();

    // Group keys in first-encounter order, sums indexed alongside
    let mut index: HashMap<(&str, &str, &str), usize> = HashMap::new();
    let mut keys: Vec<(&str, &str, &str)> = Vec::new();
    let mut sums: Vec<(u64, u64)> = Vec::new();

    for record in dataset.records() {
        if !states.contains(record.state.as_str())
            || !counties.contains(record.county.as_str())
            || !dates.contains(record.date.as_str())
        {
            continue;
        }

        let key = (
            record.state.as_str(),
            record.county.as_str(),
            record.date.as_str(),
        );

        let slot = *index.entry(key).or_insert_with(|| {
            keys.push(key);
            sums.push((0, 0));
            keys.len() - 1
        });

        sums[slot].0 += record.cases;
        sums[slot].1 += record.deaths;
    }

    let mut rows = Vec::with_capacity(keys.len() * 2);
    for (slot, (state, county, date)) in keys.iter().enumerate() {
        let (cases, deaths) = sums[slot];
        for metric in Metric::all() {
            rows.push(AggregatedRow {
                state: state.to_string(),
                county: county.to_string(),
                date: date.to_string(),
                metric: *metric,
                value: match metric {
                    Metric::Cases => cases,
                    Metric::Deaths => deaths,
                },
            });
        }
    }

    Some(rows)
}
