//! Body extractor for the add and update endpoints.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::config::INVALID_EMPLOYEE_DATA;
use crate::domain::Employee;
use crate::errors::AppError;

/// Body of the add and update endpoints
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EmployeeRequest {
    /// Employee name (required, unique)
    #[validate(length(min = 1))]
    #[schema(example = "Alice")]
    pub name: String,
    /// Employee value
    #[serde(default)]
    #[schema(example = 5000)]
    pub value: i32,
}

/// An employee read from a JSON body.
///
/// A missing body, malformed JSON, a wrong content type and an empty name
/// all become the same 400; the underlying reason is logged at debug level.
pub struct EmployeeBody(pub Employee);

#[async_trait]
impl<S> FromRequest<S> for EmployeeBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(request) = Json::<EmployeeRequest>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(reason = %rejection.body_text(), "Unreadable employee body");
                AppError::validation(INVALID_EMPLOYEE_DATA)
            })?;

        request.validate().map_err(|errors| {
            tracing::debug!(%errors, "Employee body failed validation");
            AppError::validation(INVALID_EMPLOYEE_DATA)
        })?;

        Ok(EmployeeBody(Employee::new(request.name, request.value)))
    }
}
