//! Core data types for the avocado dataset
//!
//! - `Row`: one weekly observation for a region and avocado type
//! - `Dataset`: the full table, sorted by date and immutable after load

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use crate::charts::FilterSelection;

/// A single observation from the CSV source
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Row {
    /// Week the observation was taken
    pub date: NaiveDate,
    /// Sales region, e.g. "Albany" or "TotalUS"
    pub region: String,
    /// "organic" or "conventional"
    #[serde(rename = "type")]
    pub avocado_type: String,
    /// Average price of a single avocado in USD
    pub average_price: f64,
    /// Total number of avocados sold
    pub total_volume: f64,
}

impl Row {
    /// Create a row
    pub fn new(
        date: NaiveDate,
        region: impl Into<String>,
        avocado_type: impl Into<String>,
        average_price: f64,
        total_volume: f64,
    ) -> Self {
        Self {
            date,
            region: region.into(),
            avocado_type: avocado_type.into(),
            average_price,
            total_volume,
        }
    }
}

/// The loaded table
///
/// Rows are kept in non-decreasing date order. There is no way to mutate a
/// `Dataset` after construction; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset from rows in any order.
    ///
    /// The sort is stable, so rows sharing a date keep their input order.
    pub fn from_rows(mut rows: Vec<Row>) -> Self {
        rows.sort_by_key(|row| row.date);
        Self { rows }
    }

    /// All rows in date order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct regions, sorted lexicographically
    pub fn regions(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct avocado types in the order they first appear
    pub fn types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.avocado_type.as_str()))
            .map(|row| row.avocado_type.clone())
            .collect()
    }

    /// Earliest and latest date, or `None` when there are no rows
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        // Sorted, so the ends of the vector are the bounds
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Rows included by a selection, in date order
    pub fn filter<'a>(
        &'a self,
        selection: &'a FilterSelection,
    ) -> impl Iterator<Item = &'a Row> + 'a {
        self.rows.iter().filter(move |row| selection.matches(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Dataset {
        Dataset::from_rows(vec![
            Row::new(date("2015-01-18"), "Boston", "organic", 1.7, 900.0),
            Row::new(date("2015-01-04"), "Albany", "conventional", 1.22, 40873.28),
            Row::new(date("2015-01-11"), "Albany", "organic", 1.24, 1000.5),
            Row::new(date("2015-01-04"), "Atlanta", "organic", 1.1, 500.0),
        ])
    }

    #[test]
    fn test_rows_sorted_by_date() {
        let dataset = sample();
        let dates: Vec<_> = dataset.rows().iter().map(|r| r.date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let dataset = sample();
        assert_eq!(dataset.rows()[0].region, "Albany");
        assert_eq!(dataset.rows()[1].region, "Atlanta");
    }

    #[test]
    fn test_regions_sorted_and_distinct() {
        assert_eq!(sample().regions(), vec!["Albany", "Atlanta", "Boston"]);
    }

    #[test]
    fn test_types_in_first_seen_order() {
        // After sorting the first row is Albany/conventional
        assert_eq!(sample().types(), vec!["conventional", "organic"]);
    }

    #[test]
    fn test_date_bounds() {
        assert_eq!(
            sample().date_bounds(),
            Some((date("2015-01-04"), date("2015-01-18")))
        );
        assert_eq!(Dataset::default().date_bounds(), None);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_rows(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
        assert!(dataset.regions().is_empty());
        assert!(dataset.types().is_empty());
    }
}
