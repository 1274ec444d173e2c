//! Custom request extractors.

mod employee_body;

pub use employee_body::{EmployeeBody, EmployeeRequest};
