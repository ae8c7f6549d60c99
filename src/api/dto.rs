//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::charts::FilterSelection;
use crate::dataset::DATE_FORMAT;

// ============================================
// CHART DTOs
// ============================================

/// Filter control values sent by the page
///
/// Used both as query parameters (`GET`) and as a JSON body (`POST`).
/// Any field may be missing or empty, e.g. after the user clears a date.
#[derive(Debug, Deserialize)]
pub struct ChartRequest {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, rename = "type")]
    pub avocado_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl ChartRequest {
    /// Convert into a complete selection
    ///
    /// Returns `Ok(None)` when a control has no value, and a validation error
    /// when a date is present but malformed.
    pub fn into_selection(self) -> ApiResult<Option<FilterSelection>> {
        let start_date = parse_date_param("start_date", self.start_date.as_deref())?;
        let end_date = parse_date_param("end_date", self.end_date.as_deref())?;

        let selection = match (non_empty(self.region), non_empty(self.avocado_type)) {
            (Some(region), Some(avocado_type)) => start_date
                .zip(end_date)
                .map(|(start, end)| FilterSelection::new(region, avocado_type, start, end)),
            _ => None,
        };

        Ok(selection)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Accepts `YYYY-MM-DD`, or a `YYYY-MM-DDTHH:MM:SS` timestamp whose date is used
fn parse_date_param(name: &str, value: Option<&str>) -> ApiResult<Option<NaiveDate>> {
    let value = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(v) => v,
    };

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(Some(date));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Some(datetime.date()));
    }

    Err(ApiError::Validation(format!(
        "{} must be a YYYY-MM-DD date, got '{}'",
        name, value
    )))
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded" (empty dataset)
    pub status: String,
    /// Rows in the loaded dataset
    pub rows: usize,
    pub regions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: Option<&str>, end: Option<&str>) -> ChartRequest {
        ChartRequest {
            region: Some("Albany".to_string()),
            avocado_type: Some("organic".to_string()),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }

    #[test]
    fn test_complete_request() {
        let selection = request(Some("2015-01-04"), Some("2018-03-25"))
            .into_selection()
            .unwrap()
            .unwrap();
        assert_eq!(selection.region, "Albany");
        assert_eq!(selection.start_date, NaiveDate::from_ymd_opt(2015, 1, 4).unwrap());
    }

    #[test]
    fn test_datetime_param() {
        let selection = request(Some("2015-01-04T00:00:00"), Some("2018-03-25"))
            .into_selection()
            .unwrap()
            .unwrap();
        assert_eq!(selection.start_date, NaiveDate::from_ymd_opt(2015, 1, 4).unwrap());
    }

    #[test]
    fn test_cleared_date_gives_no_selection() {
        assert!(request(Some(""), Some("2018-03-25"))
            .into_selection()
            .unwrap()
            .is_none());
        assert!(request(Some("2015-01-04"), None)
            .into_selection()
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_missing_region_gives_no_selection() {
        let mut req = request(Some("2015-01-04"), Some("2018-03-25"));
        req.region = None;
        assert!(req.into_selection().unwrap().is_none());
    }

    #[test]
    fn test_malformed_date_is_validation_error() {
        let result = request(Some("04/01/2015"), Some("2018-03-25")).into_selection();
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
