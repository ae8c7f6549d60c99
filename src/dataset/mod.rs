//! Avocado Dataset
//!
//! - **types**: `Row` and the immutable, date-sorted `Dataset`
//! - **loader**: CSV reading and date parsing
//! - **error**: Error types
//!
//! The dataset is loaded once at start-up. Any failure is fatal.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{load_path, load_reader, load_str, DATE_FORMAT};
pub use types::{Dataset, Row};
