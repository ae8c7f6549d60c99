//! Filter selection
//!
//! The current values of the three filter controls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::Row;

/// Region, type and an inclusive date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub region: String,
    #[serde(rename = "type")]
    pub avocado_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FilterSelection {
    pub fn new(
        region: impl Into<String>,
        avocado_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            region: region.into(),
            avocado_type: avocado_type.into(),
            start_date,
            end_date,
        }
    }

    /// Exact, case-sensitive match on region and type; both date bounds inclusive.
    ///
    /// A reversed range (`start_date > end_date`) matches nothing.
    pub fn matches(&self, row: &Row) -> bool {
        row.region == self.region
            && row.avocado_type == self.avocado_type
            && row.date >= self.start_date
            && row.date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row() -> Row {
        Row::new(date(2016, 6, 5), "Albany", "organic", 1.5, 1200.0)
    }

    #[test]
    fn test_matches_inclusive_bounds() {
        let day = date(2016, 6, 5);
        assert!(FilterSelection::new("Albany", "organic", day, day).matches(&row()));
        assert!(FilterSelection::new("Albany", "organic", date(2016, 1, 1), day).matches(&row()));
        assert!(FilterSelection::new("Albany", "organic", day, date(2016, 12, 31)).matches(&row()));
    }

    #[test]
    fn test_outside_range() {
        let selection =
            FilterSelection::new("Albany", "organic", date(2016, 6, 6), date(2016, 12, 31));
        assert!(!selection.matches(&row()));
    }

    #[test]
    fn test_exact_category_match() {
        let (start, end) = (date(2015, 1, 1), date(2018, 12, 31));
        assert!(!FilterSelection::new("albany", "organic", start, end).matches(&row()));
        assert!(!FilterSelection::new("Alban", "organic", start, end).matches(&row()));
        assert!(!FilterSelection::new("Albany", "Organic", start, end).matches(&row()));
        assert!(!FilterSelection::new("Albany", "conventional", start, end).matches(&row()));
    }

    #[test]
    fn test_reversed_range_matches_nothing() {
        let selection =
            FilterSelection::new("Albany", "organic", date(2016, 6, 5), date(2016, 6, 4));
        assert!(!selection.matches(&row()));
    }

    #[test]
    fn test_deserialize_uses_type_key() {
        let selection: FilterSelection = serde_json::from_str(
            r#"{"region":"Albany","type":"organic","start_date":"2015-01-04","end_date":"2018-03-25"}"#,
        )
        .unwrap();
        assert_eq!(selection.avocado_type, "organic");
        assert_eq!(selection.end_date, date(2018, 3, 25));
    }
}
