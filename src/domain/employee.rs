//! Employee domain entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::SUM_THRESHOLD;
use crate::errors::AppError;

/// Employee domain entity. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    /// Unique employee name
    #[schema(example = "Alice")]
    pub name: String,
    /// Employee value
    #[schema(example = 5000)]
    pub value: i32,
}

impl Employee {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One page of employees plus the size of the whole table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    /// Employees on the requested page, in sort order
    pub employees: Vec<Employee>,
    /// Number of employees across all pages
    #[schema(example = 42)]
    pub total_count: u64,
}

/// Columns a page may be sorted by.
///
/// Parsing is the only way a caller-supplied sort key reaches a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Name,
    Value,
}

impl SortColumn {
    pub const ALL: [SortColumn; 2] = [SortColumn::Name, SortColumn::Value];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Value => "Value",
        }
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::invalid_argument(format!(
                    "unsupported sort column '{}', expected Name or Value",
                    s
                ))
            })
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report the A/B/C sum only once it reaches the threshold.
///
/// Below the threshold the result is 0, indistinguishable from a real zero.
pub fn gate_abc_sum(sum: i64) -> i64 {
    if sum >= SUM_THRESHOLD {
        sum
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_column_parses_case_insensitively() {
        assert_eq!("Name".parse::<SortColumn>().unwrap(), SortColumn::Name);
        assert_eq!("name".parse::<SortColumn>().unwrap(), SortColumn::Name);
        assert_eq!("VALUE".parse::<SortColumn>().unwrap(), SortColumn::Value);
    }

    #[test]
    fn sort_column_rejects_anything_else() {
        let err = "Name; DROP TABLE Employees".parse::<SortColumn>().unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!("".parse::<SortColumn>().is_err());
    }

    #[test]
    fn sum_below_threshold_reports_zero() {
        assert_eq!(gate_abc_sum(11200), 11200);
        assert_eq!(gate_abc_sum(SUM_THRESHOLD), SUM_THRESHOLD);
        assert_eq!(gate_abc_sum(SUM_THRESHOLD - 1), 0);
        assert_eq!(gate_abc_sum(10000), 0);
    }

    #[test]
    fn page_serializes_with_camel_case_total() {
        let page = EmployeePage {
            employees: vec![Employee::new("Eve", 2)],
            total_count: 1,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalCount"], 1);
        assert_eq!(json["employees"][0]["name"], "Eve");
    }
}
