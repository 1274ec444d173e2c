//! Application services layer - Use cases and business logic.
//!
//! Services sit between the HTTP handlers and the repository. They
//! depend on the `EmployeeRepository` trait for dependency inversion.

mod employee_service;

pub use employee_service::{EmployeeManager, EmployeeService};
