//! Health Routes
//!
//! Health check endpoints for monitoring and probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (dataset is served)
//! - GET /health - Full health status with dataset summary

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{DatasetSummary, HealthResponse};
use crate::api::state::AppState;
use crate::query;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the dataset is held in memory. The dataset loads before
/// the server binds, so this only reports unavailable for an empty table.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.dataset.is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /health
///
/// Full health status with a dataset summary.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if state.dataset.is_empty() {
        "unhealthy"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        dataset: DatasetSummary {
            rows: state.dataset.len(),
            states: query::state_options(&state.dataset).len(),
            path: state.data_path.clone(),
        },
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
