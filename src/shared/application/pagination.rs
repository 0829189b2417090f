/// Pagination support for listing queries
///
/// Standard page model shared by every entity kind
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const MAX_PAGE_SIZE: u32 = 100;

/// A validated page request: `page_number >= 1`, `page_size` in `1..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a page request, normalizing out-of-range values.
    /// A zero page number becomes 1; sizes are clamped into `1..=100`.
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Parse raw query-string values.
    ///
    /// * `page_number`: absent or non-positive -> 1, non-integer -> validation error
    /// * `page_size`: absent -> 100, above 100 -> 100, non-positive or non-integer -> validation error
    pub fn parse(page_number: Option<&str>, page_size: Option<&str>) -> AppResult<Self> {
        let page_number = match page_number.map(str::trim).filter(|s| !s.is_empty()) {
            None => DEFAULT_PAGE_NUMBER,
            Some(raw) => {
                let value: i64 = raw.parse().map_err(|_| {
                    AppError::validation("page_number", format!("'{}' is not an integer", raw))
                })?;
                if value <= 0 {
                    DEFAULT_PAGE_NUMBER
                } else {
                    u32::try_from(value).map_err(|_| {
                        AppError::validation("page_number", format!("{} is too large", value))
                    })?
                }
            }
        };

        let page_size = match page_size.map(str::trim).filter(|s| !s.is_empty()) {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => {
                let value: i64 = raw.parse().map_err(|_| {
                    AppError::validation("page_size", format!("'{}' is not an integer", raw))
                })?;
                if value <= 0 {
                    return Err(AppError::validation("page_size", "must be positive"));
                }
                value.min(MAX_PAGE_SIZE as i64) as u32
            }
        };

        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Offset of the first document on this page
    pub fn offset(&self) -> u64 {
        (self.page_number as u64 - 1) * self.page_size as u64
    }

    /// Number of documents to request
    pub fn limit(&self) -> u64 {
        self.page_size as u64
    }
}
