use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of the A/B/C sum endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct SumResponse {
    /// Sum over names starting with A, B or C; 0 below the reporting threshold
    #[schema(example = 11200)]
    pub sum: i64,
}

/// Created response helper (201 with the created resource as body)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
