//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;

use employee_records::infra::EmployeeRepository;
use employee_records::{Config, Database, Employee, EmployeeStore};

/// A migrated SQLite database in a throwaway directory.
///
/// Keep the `TempDir` alive for as long as the database is used.
pub async fn test_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("employees.db");
    let config = Config::with_database_url(format!("sqlite://{}?mode=rwc", path.display()));

    let db = Database::connect(&config)
        .await
        .expect("connect and migrate test database");
    (dir, db)
}

/// An empty SQLite file with no schema applied.
pub async fn unmigrated_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("employees.db");
    let config = Config::with_database_url(format!("sqlite://{}?mode=rwc", path.display()));

    let db = Database::connect_without_migrations(&config)
        .await
        .expect("connect to test database");
    (dir, db)
}

/// A store over a fresh database holding `rows`.
pub async fn seeded_store(rows: &[(&str, i32)]) -> (TempDir, Arc<EmployeeStore>) {
    let (dir, db) = test_database().await;
    let store = Arc::new(EmployeeStore::new(db.get_connection()));
    for (name, value) in rows {
        store
            .insert(Employee::new(*name, *value))
            .await
            .expect("seed employee");
    }
    (dir, store)
}
