//! Page Routes
//!
//! - GET / - Dashboard page
//! - GET /assets/:name - Embedded stylesheet and script
//! - GET /api/v1/layout - Page tree as JSON

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::layout::DashboardLayout;

const STYLE_CSS: &str = include_str!("../../../assets/style.css");
const DASHBOARD_JS: &str = include_str!("../../../assets/dashboard.js");

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.as_ref().clone())
}

/// GET /assets/:name
pub async fn asset(Path(name): Path<String>) -> ApiResult<Response> {
    let (content_type, body) = match name.as_str() {
        "style.css" => ("text/css; charset=utf-8", STYLE_CSS),
        "dashboard.js" => ("application/javascript; charset=utf-8", DASHBOARD_JS),
        _ => return Err(ApiError::NotFound(format!("asset '{}'", name))),
    };

    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.layout.as_ref().clone())
}
