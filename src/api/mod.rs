//! Countydash REST API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - The embedded dashboard page
//!
//! ## Options
//! - `GET /api/v1/options/states` - Distinct states, sorted
//! - `GET /api/v1/options/counties?states=a,b` - Counties of the selected states
//! - `GET /api/v1/options/dates` - Dates in file order
//!
//! ## Chart
//! - `POST /api/v1/chart` - Aggregate a selection into a grouped bar figure
//!   (204 No Content for an incomplete selection)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use countydash::api::{serve, ApiConfig, AppState};
//! use countydash::dataset::load_dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(load_dataset(Path::new("us-counties.csv"))?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone(), "us-counties.csv");
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
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Option routes
        .route("/options/states", get(routes::options::list_states))
        .route("/options/counties", get(routes::options::list_counties))
        .route("/options/dates", get(routes::options::list_dates))
        // Chart route
        .route("/chart", post(routes::chart::build_chart));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::ui::dashboard))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Loopback-only surface
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Countydash listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Countydash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
    use crate::dataset::load_dataset_from_reader;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    const TEST_CSV: &str = "date,county,state,cases,deaths
2020-03-01,Cook,Illinois,5,0
2020-03-01,Cook,Illinois,3,1
2020-03-01,DuPage,Illinois,2,0
2020-03-02,Dane,Wisconsin,1,0";

    fn create_test_app() -> Router {
        let dataset = load_dataset_from_reader(TEST_CSV.as_bytes()).unwrap();
        let state = AppState::new(Arc::new(dataset), ApiConfig::default(), "test.csv");
        build_router(state)
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_page_served() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_state_options() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/options/states")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["options"][0], "Illinois");
        assert_eq!(json["options"][1], "Wisconsin");
    }

    #[tokio::test]
    async fn test_county_options_scoped_to_states() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/options/counties?states=Illinois")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["options"][0], "Cook");
        assert_eq!(json["options"][1], "DuPage");
        assert_eq!(json["total"], 2);
    }

    #[tokio::test]
    async fn test_chart_complete_selection() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chart")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"states":["Illinois"],"counties":["Cook"],"dates":["2020-03-01"]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["layout"]["barmode"], "group");
        assert_eq!(json["data"][0]["name"], "cases");
        assert_eq!(json["data"][0]["y"][0], 8);
        assert_eq!(json["data"][1]["name"], "deaths");
        assert_eq!(json["data"][1]["y"][0], 1);
    }

    #[tokio::test]
    async fn test_chart_incomplete_selection_is_no_content() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chart")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"states":["Illinois"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_chart_invalid_json() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chart")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
