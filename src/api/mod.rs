//! Dashboard HTTP API
//!
//! HTTP layer for the avocado dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page
//! - `GET /assets/style.css` - Stylesheet
//! - `GET /assets/dashboard.js` - Control wiring and chart rendering
//!
//! ## Data
//! - `GET /api/v1/layout` - Page tree as JSON
//! - `GET /api/v1/charts` - Chart update from query parameters
//! - `POST /api/v1/charts` - Chart update from a JSON body
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use avocado_analytics::api::{serve, AppState};
//! use avocado_analytics::config::ServerConfig;
//! use avocado_analytics::dataset::load_path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = load_path("avocado.csv")?;
//!     let config = ServerConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/layout", get(routes::page::layout))
        .route(
            "/charts",
            get(routes::charts::get_charts).post(routes::charts::post_charts),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/assets/:name", get(routes::page::asset))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let rows = state.dataset.len();
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(rows, debug = config.debug, "Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartPair;
    use crate::dataset::load_str;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    const CSV: &str = "Date,AveragePrice,Total Volume,type,region
2015-01-11,1.77,1182.56,organic,Albany
2015-01-04,1.79,1373.95,organic,Albany
2015-01-04,1.22,40873.28,conventional,Albany
2015-01-04,1.76,3846.69,organic,Atlanta
2015-01-18,1.31,1111.0,organic,Albany";

    fn create_test_app() -> Router {
        let dataset = load_str(CSV).unwrap();
        build_router(AppState::new(dataset, ServerConfig::default()))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn charts(response: Response) -> ChartPair {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["rows"], 5);
        assert_eq!(health["regions"], 2);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("Avocado Analytics"));
        assert!(html.contains("id=\"region-filter\""));
        assert!(html.contains("/assets/dashboard.js"));
    }

    #[tokio::test]
    async fn test_assets() {
        let response = get(create_test_app(), "/assets/style.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/css"));

        let response = get(create_test_app(), "/assets/dashboard.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        let script = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(script.contains("/api/v1/charts"));
        // Network failures are logged rather than left as unhandled rejections
        assert!(script.contains("} catch (err) {"));

        let response = get(create_test_app(), "/assets/missing.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_layout_json() {
        let response = get(create_test_app(), "/api/v1/layout").await;
        assert_eq!(response.status(), StatusCode::OK);

        let layout: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(layout["title"], "Avocado Analytics: Understand your Avocados!");
        assert_eq!(layout["root"]["type"], "div");
    }

    #[tokio::test]
    async fn test_get_charts() {
        let response = get(
            create_test_app(),
            "/api/v1/charts?region=Albany&type=organic&start_date=2015-01-04&end_date=2015-01-18",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let charts = charts(response).await;
        assert_eq!(charts.price_chart.y(), &[1.79, 1.77, 1.31]);
        assert_eq!(charts.volume_chart.y(), &[1373.95, 1182.56, 1111.0]);
    }

    #[tokio::test]
    async fn test_post_charts() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/charts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"region":"Atlanta","type":"organic","start_date":"2015-01-01","end_date":"2015-12-31"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let charts = charts(response).await;
        assert_eq!(charts.price_chart.y(), &[1.76]);
        assert_eq!(
            charts.volume_chart.layout.title.text,
            "Avocados Sold in Atlanta"
        );
    }

    #[tokio::test]
    async fn test_reversed_range_is_empty() {
        let response = get(
            create_test_app(),
            "/api/v1/charts?region=Albany&type=organic&start_date=2015-01-18&end_date=2015-01-04",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let charts = charts(response).await;
        assert!(charts.price_chart.x().is_empty());
        assert!(charts.volume_chart.x().is_empty());
    }

    #[tokio::test]
    async fn test_cleared_date_is_empty() {
        let response = get(
            create_test_app(),
            "/api/v1/charts?region=Albany&type=organic&start_date=&end_date=2015-01-18",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(charts(response).await.price_chart.y().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_date() {
        let response = get(
            create_test_app(),
            "/api/v1/charts?region=Albany&type=organic&start_date=yesterday&end_date=2015-01-18",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_post_invalid_json() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/charts")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Failed to parse the request body as JSON"));
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_post_without_json_content_type() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/charts")
                    .body(Body::from(r#"{"region":"Albany"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
