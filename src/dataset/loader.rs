//! CSV loading
//!
//! Reads the avocado CSV (header row required) into a [`Dataset`].
//! Only the `Date`, `AveragePrice`, `Total Volume`, `type` and `region`
//! columns are used; any other column is ignored.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{Dataset, Row};

/// Format of the `Date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns as they appear in the CSV header
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "AveragePrice")]
    average_price: f64,
    #[serde(rename = "Total Volume")]
    total_volume: f64,
    #[serde(rename = "type")]
    avocado_type: String,
    region: String,
}

/// Load the dataset from a CSV file on disk
pub fn load_path(path: impl AsRef<Path>) -> DatasetResult<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = load_reader(file)?;

    match dataset.date_bounds() {
        Some((min, max)) => tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            %min,
            %max,
            "Loaded dataset"
        ),
        None => tracing::warn!(path = %path.display(), "Loaded empty dataset"),
    }

    Ok(dataset)
}

/// Load the dataset from any CSV source
///
/// Fails on the first malformed record; a dataset is never partially loaded.
pub fn load_reader<R: Read>(reader: R) -> DatasetResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRecord = record.deserialize(Some(&headers))?;

        let date = parse_date(&raw.date).ok_or_else(|| DatasetError::Parse {
            line,
            value: raw.date.clone(),
        })?;

        rows.push(Row {
            date,
            region: raw.region,
            avocado_type: raw.avocado_type,
            average_price: raw.average_price,
            total_volume: raw.total_volume,
        });
    }

    tracing::debug!(rows = rows.len(), "Parsed CSV records");
    Ok(Dataset::from_rows(rows))
}

/// Load from CSV text (useful for testing)
pub fn load_str(csv_data: &str) -> DatasetResult<Dataset> {
    load_reader(csv_data.as_bytes())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
