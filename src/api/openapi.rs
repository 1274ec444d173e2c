//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::extractors::EmployeeRequest;
use crate::api::handlers::{employee_handler, list_handler};
use crate::domain::{Employee, EmployeePage};
use crate::types::SumResponse;

/// OpenAPI documentation for the Employee Records API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Records API",
        version = "0.1.0",
        description = "Paginated employee records with prefix-keyed bulk operations",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Employee endpoints
        employee_handler::get_employees,
        employee_handler::get_employee,
        employee_handler::add_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
        // Bulk and aggregate endpoints
        list_handler::increment_values,
        list_handler::sum_abc,
    ),
    components(
        schemas(
            Employee,
            EmployeePage,
            SumResponse,
            EmployeeRequest,
        )
    ),
    tags(
        (name = "Employees", description = "Employee record management"),
        (name = "List", description = "Bulk increment and A/B/C sum")
    )
)]
pub struct ApiDoc;
