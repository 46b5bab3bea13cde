//! Core data types for the county dashboard dataset
//!
//! This module defines the two structures everything else reads:
//! - `CaseRecord`: one row of the source table
//! - `Dataset`: the ordered, immutable sequence of records loaded at startup

use serde::{Deserialize, Serialize};

/// One row of the source table: cumulative case/death counts for a county on a date
///
/// The `date` field is kept as the string the file carries. The dashboard
/// treats dates as opaque labels; it never parses or reorders them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseRecord {
    /// State name, e.g. "Illinois"
    pub state: String,
    /// County name, e.g. "Cook"
    pub county: String,
    /// Calendar date as written in the file, e.g. "2020-03-01"
    pub date: String,
    /// Reported case count
    pub cases: u64,
    /// Reported death count
    pub deaths: u64,
}

impl CaseRecord {
    /// Create a new record
    pub fn new(
        state: impl Into<String>,
        county: impl Into<String>,
        date: impl Into<String>,
        cases: u64,
        deaths: u64,
    ) -> Self {
        Self {
            state: state.into(),
            county: county.into(),
            date: date.into(),
            cases,
            deaths,
        }
    }
}

/// The loaded table: an ordered sequence of records, read-only after load
///
/// Record order matters to downstream consumers: date options preserve the
/// order dates first appear here, and aggregation groups in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<CaseRecord>,
}

impl Dataset {
    /// Build a dataset from already-parsed records
    pub fn new(records: Vec<CaseRecord>) -> Self {
        Self { records }
    }

    /// All records, in file order
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
