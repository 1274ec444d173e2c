//! Employee repository: every read and write against the `Employees` table.

use async_trait::async_trait;
use sea_orm::sea_query::{Alias, CaseStatement, Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};

use super::entities::employee::{ActiveModel, Column, Entity as EmployeeEntity};
use crate::config::{DEFAULT_INCREMENT, INCREMENT_RULES, SUM_PREFIXES};
use crate::domain::{gate_abc_sum, Employee, EmployeePage, SortColumn};
use crate::errors::{AppError, AppResult, StorageResultExt};
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Absence is never an error here: lookups return `None` and writes
/// against a missing name report zero rows affected.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees in the store's natural order
    async fn list_all(&self) -> AppResult<Vec<Employee>>;

    /// One page sorted ascending by `sort`, plus the total row count
    async fn list_page(&self, page: PageRequest, sort: SortColumn) -> AppResult<EmployeePage>;

    /// Find employee by name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Employee>>;

    /// Insert a new employee; `Conflict` if the name is taken
    async fn insert(&self, employee: Employee) -> AppResult<()>;

    /// Set the value of the employee with this name, returning rows affected
    async fn update(&self, employee: Employee) -> AppResult<u64>;

    /// Delete by name, returning rows affected
    async fn delete(&self, name: &str) -> AppResult<u64>;

    /// Apply the prefix-keyed increment to every row in one statement,
    /// saturating at `i32::MAX`
    async fn increment_values(&self) -> AppResult<u64>;

    /// Sum over A/B/C names, or 0 while below the reporting threshold
    async fn sum_prefix_abc(&self) -> AppResult<i64>;
}

/// SeaORM-backed implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance over an established connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn list_all(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .all(&self.db)
            .await
            .storage_context(|| "retrieving employees".to_string())?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn list_page(&self, page: PageRequest, sort: SortColumn) -> AppResult<EmployeePage> {
        // Count and page come from the same snapshot
        let txn = self
            .db
            .begin()
            .await
            .storage_context(|| "opening a transaction to list employees".to_string())?;

        let total_count = EmployeeEntity::find()
            .count(&txn)
            .await
            .storage_context(|| "counting employees".to_string())?;

        let mut query = EmployeeEntity::find().order_by_asc(Column::from(sort));
        if sort != SortColumn::Name {
            // Names are unique, so ties on value still page deterministically
            query = query.order_by_asc(Column::Name);
        }

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&txn)
            .await
            .storage_context(|| {
                format!(
                    "retrieving page {} of employees sorted by {}",
                    page.page_number(),
                    sort
                )
            })?;

        txn.commit()
            .await
            .storage_context(|| "closing the employee listing transaction".to_string())?;

        tracing::debug!(
            page = page.page_number(),
            size = page.limit(),
            %sort,
            total_count,
            "Listed employee page"
        );

        Ok(EmployeePage {
            employees: models.into_iter().map(Employee::from).collect(),
            total_count,
        })
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(name.to_owned())
            .one(&self.db)
            .await
            .storage_context(|| format!("retrieving the employee with name {}", name))?;

        Ok(result.map(Employee::from))
    }

    async fn insert(&self, employee: Employee) -> AppResult<()> {
        let name = employee.name.clone();
        let txn = self
            .db
            .begin()
            .await
            .storage_context(|| "opening a transaction to add an employee".to_string())?;

        let existing = EmployeeEntity::find_by_id(name.clone())
            .one(&txn)
            .await
            .storage_context(|| format!("checking for an existing employee named {}", name))?;
        if existing.is_some() {
            return Err(duplicate(&name));
        }

        EmployeeEntity::insert(ActiveModel::from(employee))
            .exec_without_returning(&txn)
            .await
            .map_err(|err| insert_error(&name, err))?;

        txn.commit()
            .await
            .map_err(|err| insert_error(&name, err))?;

        Ok(())
    }

    async fn update(&self, employee: Employee) -> AppResult<u64> {
        let result = EmployeeEntity::update_many()
            .col_expr(Column::Value, Expr::value(employee.value))
            .filter(Column::Name.eq(employee.name.as_str()))
            .exec(&self.db)
            .await
            .storage_context(|| {
                format!("updating the employee with name {}", employee.name)
            })?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, name: &str) -> AppResult<u64> {
        let result = EmployeeEntity::delete_by_id(name.to_owned())
            .exec(&self.db)
            .await
            .storage_context(|| format!("deleting the employee with name {}", name))?;

        Ok(result.rows_affected)
    }

    async fn increment_values(&self) -> AppResult<u64> {
        let bump = INCREMENT_RULES
            .iter()
            .fold(CaseStatement::new(), |case, (prefix, increment)| {
                case.case(
                    Column::Name.starts_with(*prefix),
                    Expr::col(Column::Value).add(*increment),
                )
            })
            .finally(Expr::col(Column::Value).add(DEFAULT_INCREMENT));

        // Saturate so every row still reads back as an i32
        let capped: SimpleExpr = Func::cust(Alias::new("MIN"))
            .arg(bump)
            .arg(i32::MAX)
            .into();

        let result = EmployeeEntity::update_many()
            .col_expr(Column::Value, capped)
            .exec(&self.db)
            .await
            .storage_context(|| "incrementing employee values".to_string())?;

        Ok(result.rows_affected)
    }

    async fn sum_prefix_abc(&self) -> AppResult<i64> {
        let matches_prefix = SUM_PREFIXES
            .iter()
            .fold(Condition::any(), |cond, prefix| {
                cond.add(Column::Name.starts_with(*prefix))
            });

        let sum: Option<Option<i64>> = EmployeeEntity::find()
            .select_only()
            .column_as(Expr::col(Column::Value).sum(), "total")
            .filter(matches_prefix)
            .into_tuple()
            .one(&self.db)
            .await
            .storage_context(|| {
                "calculating the sum of employee values for names starting with A, B, or C"
                    .to_string()
            })?;

        Ok(gate_abc_sum(sum.flatten().unwrap_or(0)))
    }
}

fn duplicate(name: &str) -> AppError {
    AppError::conflict(format!("Employee '{}'", name))
}

fn insert_error(name: &str, err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate(name),
        _ => AppError::storage("adding a new employee", err),
    }
}
