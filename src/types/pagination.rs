//! Pagination types for list endpoints.

use serde::Deserialize;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SORT_COLUMN};
use crate::errors::{AppError, AppResult};

/// Pagination query parameters as sent by the browser client.
///
/// Numbers are signed so that zero and negative values reach validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page_number: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    #[serde(default = "default_sort_column")]
    pub sort_column: String,
}

fn default_page() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_column() -> String {
    DEFAULT_SORT_COLUMN.to_string()
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            sort_column: DEFAULT_SORT_COLUMN.to_string(),
        }
    }
}

/// A validated page request: both numbers are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u64,
    page_size: u64,
}

impl PageRequest {
    /// Validate raw paging numbers.
    pub fn new(page_number: i64, page_size: i64) -> AppResult<Self> {
        let page_number = u64::try_from(page_number)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                AppError::invalid_argument(format!(
                    "pageNumber must be at least 1, got {}",
                    page_number
                ))
            })?;
        let page_size = u64::try_from(page_size)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                AppError::invalid_argument(format!(
                    "pageSize must be at least 1, got {}",
                    page_size
                ))
            })?;

        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    /// Rows per page
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}
