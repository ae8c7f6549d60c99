//! Health Routes
//!
//! Health check endpoints for monitoring and container probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (dataset loaded)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// The dataset is loaded before the server binds, so a running server is
/// always ready to serve charts.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Reports "degraded" when the dataset has no rows: the page works but
/// every chart is empty.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if state.dataset.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        rows: state.dataset.len(),
        regions: state.dataset.regions().len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
