//! HTTP request handlers.

pub mod employee_handler;
pub mod list_handler;

pub use employee_handler::employee_routes;
pub use list_handler::list_routes;
