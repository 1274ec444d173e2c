//! Migrate command - Manages the employees schema.

use std::fmt;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult, StorageResultExt};
use crate::infra::Database;

/// What a migrate action did to the employees schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrateOutcome {
    /// Migrations applied by `up`, oldest first
    Applied(Vec<String>),
    /// Migration undone by `down`; `None` when nothing was applied
    RolledBack(Option<String>),
    Status {
        applied: Vec<String>,
        pending: Vec<String>,
        employees_table: bool,
    },
    /// `fresh` rebuilt the schema, discarding this many employees
    Reset { dropped_employees: u64 },
}

impl fmt::Display for MigrateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateOutcome::Applied(names) if names.is_empty() => {
                write!(f, "Employee schema is already up to date")
            }
            MigrateOutcome::Applied(names) => {
                write!(f, "Applied {} migration(s): {}", names.len(), names.join(", "))
            }
            MigrateOutcome::RolledBack(Some(name)) => write!(f, "Rolled back {}", name),
            MigrateOutcome::RolledBack(None) => write!(f, "No applied migration to roll back"),
            MigrateOutcome::Status {
                applied,
                pending,
                employees_table,
            } => {
                for name in applied {
                    writeln!(f, "[x] {}", name)?;
                }
                for name in pending {
                    writeln!(f, "[ ] {}", name)?;
                }
                let table = if *employees_table { "present" } else { "missing" };
                write!(f, "Employees table: {}", table)
            }
            MigrateOutcome::Reset { dropped_employees } => write!(
                f,
                "Rebuilt the employee schema, dropping {} employee(s)",
                dropped_employees
            ),
        }
    }
}

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let outcome = run(args.action, &db).await?;
    println!("{}", outcome);

    Ok(())
}

/// Apply one migrate action and describe the result.
pub async fn run(action: MigrateAction, db: &Database) -> AppResult<MigrateOutcome> {
    match action {
        MigrateAction::Up => {
            let pending = db
                .pending_migrations()
                .await
                .storage_context(|| "listing pending employee migrations".to_string())?;
            db.run_migrations()
                .await
                .storage_context(|| "applying employee migrations".to_string())?;
            tracing::info!(applied = pending.len(), "Employee schema migrated");
            Ok(MigrateOutcome::Applied(pending))
        }
        MigrateAction::Down => {
            let last_applied = db
                .migration_status()
                .await
                .storage_context(|| "reading employee migration status".to_string())?
                .into_iter()
                .filter(|(_, applied)| *applied)
                .map(|(name, _)| name)
                .last();

            if let Some(name) = &last_applied {
                db.rollback_migration()
                    .await
                    .storage_context(|| format!("rolling back {}", name))?;
                tracing::info!(migration = %name, "Employee migration rolled back");
            }
            Ok(MigrateOutcome::RolledBack(last_applied))
        }
        MigrateAction::Status => {
            let (applied, pending): (Vec<_>, Vec<_>) = db
                .migration_status()
                .await
                .storage_context(|| "reading employee migration status".to_string())?
                .into_iter()
                .partition(|(_, applied)| *applied);
            let employees_table = db
                .has_employees_table()
                .await
                .storage_context(|| "looking up the Employees table".to_string())?;

            Ok(MigrateOutcome::Status {
                applied: applied.into_iter().map(|(name, _)| name).collect(),
                pending: pending.into_iter().map(|(name, _)| name).collect(),
                employees_table,
            })
        }
        MigrateAction::Fresh => {
            let table = db
                .has_employees_table()
                .await
                .storage_context(|| "looking up the Employees table".to_string())?;
            let dropped_employees = if table {
                db.employee_count()
                    .await
                    .storage_context(|| "counting employees".to_string())?
            } else {
                0
            };

            tracing::warn!(dropped_employees, "Dropping and rebuilding the employee schema");
            db.fresh_migrations()
                .await
                .storage_context(|| "rebuilding the employee schema".to_string())?;
            Ok(MigrateOutcome::Reset { dropped_employees })
        }
    }
}
