//! Chart Route
//!
//! Endpoint the dashboard page posts its selection to.
//!
//! - POST /api/v1/chart - Aggregate the selection and build the figure
//!
//! An incomplete selection answers 204 No Content: the page leaves the
//! previous chart untouched. A complete selection that matches no records
//! answers 200 with empty traces, which renders as a blank chart.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartRequest;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::chart;
use crate::query::{aggregate, Selection};

/// POST /api/v1/chart
///
/// Run the filter/aggregate pipeline for the posted selection and return
/// the grouped bar figure, or 204 when the selection is incomplete.
pub async fn build_chart(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChartRequest>,
) -> ApiResult<Response> {
    let selection: Selection = req.into();

    match aggregate(&state.dataset, &selection) {
        Some(rows) => {
            tracing::debug!(chart_rows = rows.len(), "Built chart for selection");
            let spec = chart::render(&rows);
            Ok((StatusCode::OK, Json(spec)).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;
    use crate::dataset::{CaseRecord, Dataset};

    fn test_state() -> Arc<AppState> {
        let dataset = Dataset::new(vec![
            CaseRecord::new("Illinois", "Cook", "2020-03-01", 5, 0),
            CaseRecord::new("Illinois", "Cook", "2020-03-01", 3, 1),
        ]);
        Arc::new(AppState::new(
            Arc::new(dataset),
            ApiConfig::default(),
            "test.csv",
        ))
    }

    #[tokio::test]
    async fn test_incomplete_selection_is_no_content() {
        let req = ChartRequest {
            states: vec!["Illinois".to_string()],
            ..Default::default()
        };

        let response = build_chart(State(test_state()), Json(req)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_complete_selection_returns_figure() {
        let req = ChartRequest {
            states: vec!["Illinois".to_string()],
            counties: vec!["Cook".to_string()],
            dates: vec!["2020-03-01".to_string()],
        };

        let response = build_chart(State(test_state()), Json(req)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
