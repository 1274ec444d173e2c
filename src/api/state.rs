//! Application state shared by all handlers.

use std::sync::Arc;

use crate::infra::{Database, EmployeeStore};
use crate::services::{EmployeeManager, EmployeeService};

/// Application state containing the services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Employee service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the store and service over an established database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let store = Arc::new(EmployeeStore::new(database.get_connection()));
        let employee_service = Arc::new(EmployeeManager::new(store));

        Self {
            employee_service,
            database,
        }
    }
}
