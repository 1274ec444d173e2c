//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Employee, SortColumn};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "Value")]
    pub value: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            name: model.name,
            value: model.value,
        }
    }
}

impl From<Employee> for ActiveModel {
    fn from(employee: Employee) -> Self {
        ActiveModel {
            name: Set(employee.name),
            value: Set(employee.value),
        }
    }
}

/// Canonical column for each permitted sort key
impl From<SortColumn> for Column {
    fn from(sort: SortColumn) -> Self {
        match sort {
            SortColumn::Name => Column::Name,
            SortColumn::Value => Column::Value,
        }
    }
}
