//! County Dataset
//!
//! This module provides the in-memory dataset the dashboard serves from:
//!
//! - **types**: Core data structures (CaseRecord, Dataset)
//! - **loader**: CSV loading with required-column validation
//! - **error**: Error types
//!
//! The dataset is loaded once at process start and never mutated afterwards.
//! Everything downstream (option providers, the aggregate engine, the API)
//! reads it through a shared `Arc<Dataset>`.
//!
//! # Example
//!
//! ```rust,no_run
//! use countydash::dataset::load_dataset;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = load_dataset(Path::new("us-counties.csv"))?;
//!     println!("Loaded {} records", dataset.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types
pub use error::{DatasetError, DatasetResult};
pub use loader::{load_dataset, load_dataset_from_reader, REQUIRED_COLUMNS};
pub use types::{CaseRecord, Dataset};
