//! Countydash Query Engine
//!
//! Pure functions over the loaded dataset:
//!
//! - **options**: Derive the selectable values for the three inputs
//! - **aggregate**: Filter by a selection, group, sum, and unpivot for charting
//!
//! # Execution Pipeline
//!
//! ```text
//! Selection → Filter → Group by (state, county, date) → Sum → Unpivot → AggregatedRows
//! ```
//!
//! An incomplete selection (any of states/counties/dates empty) short-circuits
//! to the "no update" sentinel instead of producing a partial chart.
//!
//! # Example
//!
//! ```rust,ignore
//! use countydash::query::{aggregate, Selection};
//!
//! let selection = Selection::new(
//!     vec!["Illinois".into()],
//!     vec!["Cook".into()],
//!     vec!["2020-03-01".into()],
//! );
//!
//! match aggregate(&dataset, &selection) {
//!     Some(rows) => println!("{} chart rows", rows.len()),
//!     None => println!("incomplete selection, chart unchanged"),
//! }
//! ```

pub mod aggregate;
pub mod options;

// Re-export commonly used types
pub use aggregate::{aggregate, AggregatedRow, Metric, Selection};
pub use options::{county_options, date_options, state_options};
