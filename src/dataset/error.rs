//! Dataset error types
//!
//! Defines all errors that can occur while loading the dataset.
//! Every variant is fatal at startup: the dashboard cannot run without
//! its table, and no reload path exists.

use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Input file could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or record deserialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column '{0}' in dataset header")]
    MissingColumn(String),
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
