//! Dataset Loader
//!
//! Reads the county CSV into memory at process start.
//!
//! The file must carry a header row naming at least the required columns;
//! extra columns (e.g. `fips` in the upstream publication) are ignored.
//! Any failure here is fatal: a dashboard without its table has nothing
//! to serve, and there is no reload path.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dataset::error::{DatasetError, DatasetResult};
use crate::dataset::types::{CaseRecord, Dataset};

/// Columns the loader requires in the header row
pub const REQUIRED_COLUMNS: [&str; 5] = ["state", "county", "date", "cases", "deaths"];

/// Load the dataset from a CSV file on disk
pub fn load_dataset(path: &Path) -> DatasetResult<Dataset> {
    let file = File::open(path)?;
    load_dataset_from_reader(file)
}

/// Load the dataset from any reader (useful for tests)
pub fn load_dataset_from_reader<R: Read>(reader: R) -> DatasetResult<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: CaseRecord = result?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}

/// Check that every required column is present in the header row
fn validate_headers(headers: &csv::StringRecord) -> DatasetResult<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}
