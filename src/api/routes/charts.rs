//! Chart Routes
//!
//! The filter-update round trip: control values in, both figures out.
//!
//! - GET /api/v1/charts?region=&type=&start_date=&end_date=
//! - POST /api/v1/charts (JSON body with the same fields)

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartRequest;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts::{empty_charts, update_charts, ChartPair};

/// GET /api/v1/charts
pub async fn get_charts(
    State(state): State<Arc<AppState>>,
    Query(req): Query<ChartRequest>,
) -> ApiResult<Json<ChartPair>> {
    charts_for(&state, req).map(Json)
}

/// POST /api/v1/charts
///
/// A body that is not valid JSON for [`ChartRequest`] is a validation error.
pub async fn post_charts(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChartRequest>, JsonRejection>,
) -> ApiResult<Json<ChartPair>> {
    let Json(req) = body?;
    charts_for(&state, req).map(Json)
}

/// Incomplete selections render empty figures titled with whatever region was sent
fn charts_for(state: &AppState, req: ChartRequest) -> ApiResult<ChartPair> {
    let region = req.region.clone().unwrap_or_default();

    let charts = match req.into_selection()? {
        Some(selection) => update_charts(&state.dataset, &selection),
        None => {
            tracing::debug!(region = %region, "Incomplete selection, returning empty charts");
            empty_charts(&region)
        }
    };

    Ok(charts)
}
