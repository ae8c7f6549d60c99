//! Dataset error types
//!
//! Every error here is fatal at start-up: the dashboard never serves a
//! partially loaded dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the avocado dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV, a missing required column or a non-numeric value
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A `Date` value did not match the `YYYY-MM-DD` format
    #[error("Line {line}: invalid date '{value}' (expected YYYY-MM-DD)")]
    Parse { line: u64, value: String },
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::Parse {
            line: 3,
            value: "15/01/2015".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 3: invalid date '15/01/2015' (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_io_error_display_names_path() {
        let err = DatasetError::Io {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("missing.csv"));
    }
}
