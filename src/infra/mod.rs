//! Infrastructure layer - External systems integration
//!
//! This module handles all storage concerns:
//! - Database connection and migrations
//! - The employee repository

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{EmployeeRepository, EmployeeStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockEmployeeRepository;
