//! Bulk and aggregate handlers, mounted under `/list`.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::SumResponse;

pub const INCREMENT_CONFIRMATION: &str = "Employee values have been successfully incremented.";

/// Create list routes
pub fn list_routes() -> Router<AppState> {
    Router::new()
        .route("/increment-values", post(increment_values))
        .route("/sum-abc", get(sum_abc))
}

/// Apply the prefix-keyed increment to every employee
#[utoipa::path(
    post,
    path = "/list/increment-values",
    tag = "List",
    responses(
        (status = 200, description = "Values incremented", body = String),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn increment_values(State(state): State<AppState>) -> AppResult<&'static str> {
    state.employee_service.increment_values().await?;
    Ok(INCREMENT_CONFIRMATION)
}

/// Sum of values for names starting with A, B or C
#[utoipa::path(
    get,
    path = "/list/sum-abc",
    tag = "List",
    responses(
        (status = 200, description = "Sum, or 0 below the reporting threshold", body = SumResponse),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn sum_abc(State(state): State<AppState>) -> AppResult<Json<SumResponse>> {
    let sum = state.employee_service.sum_abc().await?;
    Ok(Json(SumResponse { sum }))
}
