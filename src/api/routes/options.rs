//! Option Routes
//!
//! Endpoints feeding the three selector inputs on the dashboard page.
//!
//! - GET /api/v1/options/states - Distinct states, sorted
//! - GET /api/v1/options/counties?states=a,b - Counties of the selected states
//! - GET /api/v1/options/dates - Dates in file order

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CountyOptionsParams, OptionsResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query;

/// GET /api/v1/options/states
///
/// List every distinct state in the dataset, lexically sorted.
pub async fn list_states(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<OptionsResponse>> {
    let options = query::state_options(&state.dataset);
    Ok(Json(OptionsResponse::new(options)))
}

/// GET /api/v1/options/counties?states=a,b
///
/// List the counties belonging to the selected states, lexically sorted.
/// With no `states` parameter the list is empty: the county input offers
/// nothing until a state is chosen.
pub async fn list_counties(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountyOptionsParams>,
) -> ApiResult<Json<OptionsResponse>> {
    let selected = params.state_list();
    let options = query::county_options(&state.dataset, &selected);
    Ok(Json(OptionsResponse::new(options)))
}

/// GET /api/v1/options/dates
///
/// List every distinct date, in the order first encountered in the file.
pub async fn list_dates(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<OptionsResponse>> {
    let options = query::date_options(&state.dataset);
    Ok(Json(OptionsResponse::new(options)))
}
