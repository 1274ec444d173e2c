//! Employee Records - A small employee-records REST service
//!
//! This crate serves a single `Employees` table over HTTP: paginated and
//! sorted listing, single-row lookup, create/update/delete, plus two
//! aggregate operations keyed on the first letter of an employee's name.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Employee entity, sort keys and prefix rules
//! - **services**: Request validation and existence checks
//! - **infra**: Database connection, migrations and the employee store
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared types (paging, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Employee, EmployeePage, SortColumn};
pub use errors::{AppError, AppResult};
pub use infra::{Database, EmployeeStore};
