//! Employee CRUD handlers, mounted under `/employees`.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;

use crate::api::extractors::{EmployeeBody, EmployeeRequest};
use crate::api::AppState;
use crate::domain::{Employee, EmployeePage};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, PaginationParams};

/// Query of the single-employee lookup
#[derive(Debug, Default, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/GetEmployees", get(get_employees))
        .route("/GetEmployee", get(get_employee))
        .route("/AddEmployee", post(add_employee))
        .route("/UpdateEmployee", put(update_employee))
        .route("/DeleteEmployee/:name", delete(delete_employee))
}

/// List one page of employees
#[utoipa::path(
    get,
    path = "/employees/GetEmployees",
    tag = "Employees",
    params(
        ("pageNumber" = Option<i64>, Query, description = "1-based page number (default 1)"),
        ("pageSize" = Option<i64>, Query, description = "Rows per page (default 10)"),
        ("sortColumn" = Option<String>, Query, description = "Name or Value (default Name)")
    ),
    responses(
        (status = 200, description = "Requested page and total count", body = EmployeePage),
        (status = 400, description = "Invalid paging or sort parameters"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_employees(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<EmployeePage>> {
    let Query(params) = query.map_err(|e| AppError::invalid_argument(e.body_text()))?;

    let page = state
        .employee_service
        .list_page(params.page_number, params.page_size, &params.sort_column)
        .await?;

    Ok(Json(page))
}

/// Get one employee by name, or every employee when no name is given
#[utoipa::path(
    get,
    path = "/employees/GetEmployee",
    tag = "Employees",
    params(
        ("name" = Option<String>, Query, description = "Employee name; omit to list all")
    ),
    responses(
        (status = 200, description = "The employee (or all employees)", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> AppResult<Response> {
    match query.name.filter(|name| !name.is_empty()) {
        Some(name) => {
            let employee = state.employee_service.get_employee(&name).await?;
            Ok(Json(employee).into_response())
        }
        None => {
            let employees = state.employee_service.list_employees().await?;
            Ok(Json(employees).into_response())
        }
    }
}

/// Add a new employee
#[utoipa::path(
    post,
    path = "/employees/AddEmployee",
    tag = "Employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid employee data"),
        (status = 409, description = "An employee with this name already exists")
    )
)]
pub async fn add_employee(
    State(state): State<AppState>,
    EmployeeBody(employee): EmployeeBody,
) -> AppResult<Created<Employee>> {
    let employee = state.employee_service.add_employee(employee).await?;
    Ok(Created(employee))
}

/// Update an existing employee's value
#[utoipa::path(
    put,
    path = "/employees/UpdateEmployee",
    tag = "Employees",
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated"),
        (status = 400, description = "Invalid employee data"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    EmployeeBody(employee): EmployeeBody,
) -> AppResult<StatusCode> {
    state.employee_service.update_employee(employee).await?;
    Ok(StatusCode::OK)
}

/// Delete an employee by name
#[utoipa::path(
    delete,
    path = "/employees/DeleteEmployee/{name}",
    tag = "Employees",
    params(
        ("name" = String, Path, description = "Employee name")
    ),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    state.employee_service.delete_employee(&name).await?;
    Ok(StatusCode::OK)
}
