//! Domain layer - Core business entities and rules
//!
//! This module contains the employee model, the sort-key allow-list and
//! the reporting threshold of the A/B/C sum. The name-prefix rules are
//! applied by the store, in SQL.

pub mod employee;

pub use employee::{gate_abc_sum, Employee, EmployeePage, SortColumn};
