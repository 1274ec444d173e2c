//! Employee service - Request validation and existence checks around the store.
//!
//! The store reports absence as `None` or zero rows affected; this layer
//! turns those into `NotFound` and rejects malformed input before any
//! query runs.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::INVALID_EMPLOYEE_DATA;
use crate::domain::{Employee, EmployeePage, SortColumn};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::EmployeeRepository;
use crate::types::PageRequest;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// List every employee
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// List one page, validating paging numbers and the sort key
    async fn list_page(
        &self,
        page_number: i64,
        page_size: i64,
        sort_column: &str,
    ) -> AppResult<EmployeePage>;

    /// Get employee by name (`NotFound` when absent)
    async fn get_employee(&self, name: &str) -> AppResult<Employee>;

    /// Create a new employee
    async fn add_employee(&self, employee: Employee) -> AppResult<Employee>;

    /// Update the value of an existing employee
    async fn update_employee(&self, employee: Employee) -> AppResult<()>;

    /// Delete an existing employee
    async fn delete_employee(&self, name: &str) -> AppResult<()>;

    /// Apply the prefix-keyed increment, returning how many rows changed
    async fn increment_values(&self) -> AppResult<u64>;

    /// Threshold-gated sum over A/B/C names
    async fn sum_abc(&self) -> AppResult<i64>;
}

/// Concrete implementation of EmployeeService over a repository.
pub struct EmployeeManager<R: EmployeeRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeManager<R> {
    /// Create new employee service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn not_found_message(name: &str) -> String {
    format!("Employee with name '{}' not found.", name)
}

fn require_name(name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::validation(INVALID_EMPLOYEE_DATA));
    }
    Ok(())
}

#[async_trait]
impl<R: EmployeeRepository + ?Sized> EmployeeService for EmployeeManager<R> {
    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.repo.list_all().await
    }

    async fn list_page(
        &self,
        page_number: i64,
        page_size: i64,
        sort_column: &str,
    ) -> AppResult<EmployeePage> {
        let page = PageRequest::new(page_number, page_size)?;
        let sort: SortColumn = sort_column.parse()?;
        self.repo.list_page(page, sort).await
    }

    async fn get_employee(&self, name: &str) -> AppResult<Employee> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_not_found(|| not_found_message(name))
    }

    async fn add_employee(&self, employee: Employee) -> AppResult<Employee> {
        require_name(&employee.name)?;
        self.repo.insert(employee.clone()).await?;
        tracing::info!(name = %employee.name, "Employee added");
        Ok(employee)
    }

    async fn update_employee(&self, employee: Employee) -> AppResult<()> {
        require_name(&employee.name)?;
        self.get_employee(&employee.name).await?;

        let name = employee.name.clone();
        // Deleted between the check and the write
        if self.repo.update(employee).await? == 0 {
            return Err(AppError::NotFound(not_found_message(&name)));
        }
        tracing::info!(%name, "Employee updated");
        Ok(())
    }

    async fn delete_employee(&self, name: &str) -> AppResult<()> {
        self.get_employee(name).await?;
        self.repo.delete(name).await?;
        tracing::info!(%name, "Employee deleted");
        Ok(())
    }

    async fn increment_values(&self) -> AppResult<u64> {
        let rows = self.repo.increment_values().await?;
        tracing::info!(rows, "Employee values incremented");
        Ok(rows)
    }

    async fn sum_abc(&self) -> AppResult<i64> {
        self.repo.sum_prefix_abc().await
    }
}
