//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of employees per page
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Sort key used when the client does not send one
pub const DEFAULT_SORT_COLUMN: &str = "Name";

// =============================================================================
// Business Rules
// =============================================================================

/// Message for any employee payload that cannot be used
pub const INVALID_EMPLOYEE_DATA: &str = "Employee data is invalid.";

/// Prefix-keyed increments applied by the bulk increment, checked in order
pub const INCREMENT_RULES: &[(&str, i32)] = &[("E", 1), ("G", 10)];

/// Increment for names matching none of `INCREMENT_RULES`
pub const DEFAULT_INCREMENT: i32 = 100;

/// Name prefixes included in the A/B/C sum
pub const SUM_PREFIXES: &[&str] = &["A", "B", "C"];

/// The A/B/C sum is reported only at or above this value
pub const SUM_THRESHOLD: i64 = 11171;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (file next to the working directory)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./SqliteDB.db?mode=rwc";
