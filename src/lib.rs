//! # Countydash
//!
//! County-level COVID-19 dashboard - loads a CSV of US county case/death
//! counts once at startup and serves an interactive grouped bar chart over
//! loopback HTTP.
//!
//! ## Pipeline
//!
//! ```text
//! CSV → Dataset → (Option Providers | Filter/Aggregate) → Chart Spec → UI
//! ```
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the immutable in-memory table
//! - [`query`]: Option providers and the filter/aggregate engine
//! - [`chart`]: Grouped bar chart specification
//! - [`api`]: REST API server and dashboard page, built with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use countydash::dataset::load_dataset;
//! use countydash::query::{aggregate, state_options, Selection};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the table once; it is read-only from here on
//!     let dataset = load_dataset(Path::new("us-counties.csv"))?;
//!
//!     // Derive selectable values
//!     let states = state_options(&dataset);
//!     println!("{} states", states.len());
//!
//!     // Aggregate a full selection into chart rows
//!     let selection = Selection::new(
//!         vec!["Illinois".into()],
//!         vec!["Cook".into()],
//!         vec!["2020-03-01".into()],
//!     );
//!     if let Some(rows) = aggregate(&dataset, &selection) {
//!         let spec = countydash::chart::render(&rows);
//!         println!("{} traces", spec.data.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod query;

// Re-export top-level types for convenience
pub use dataset::{load_dataset, CaseRecord, Dataset, DatasetError, DatasetResult};

pub use query::{aggregate, AggregatedRow, Metric, Selection};

pub use chart::{render, ChartSpec};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
