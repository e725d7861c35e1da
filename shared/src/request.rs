//! Request types for the shared crate
//!
//! Pagination parameters and client-side slicing of list results.

use serde::{Deserialize, Serialize};

use crate::response::{PageMeta, PaginatedResponse};

/// Default page number
pub const DEFAULT_PAGE: u32 = 1;

/// Default items per page (storefront grids are 3x3)
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Pagination query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based, default: 1)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page (default: 9)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    /// Build parameters for a page; zero values fall back to the defaults.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_PAGE_SIZE } else { limit },
        }
    }

    /// Parse from loosely-typed query-string values (`?page=2&limit=abc`).
    ///
    /// Missing, non-numeric or zero values fall back to the defaults.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0);
        Self::new(parse(page), parse(limit))
    }

    /// Offset of the first item of this page
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.limit as usize)
    }

    /// Query pairs to append to a list request
    pub fn to_query(&self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ]
    }
}

/// Convert a page number and page size into slice-style query parameters.
pub fn params_for_page(page: u32, limit: u32) -> PaginationQuery {
    PaginationQuery::new(page, limit)
}

/// Slice a full result set down to one page.
///
/// Returns items `[(page-1)*limit, page*limit)`; the last page may be
/// partial and a page past the end is empty.
pub fn paginate<T: Clone>(items: &[T], page: u32, limit: u32) -> PaginatedResponse<T> {
    let params = params_for_page(page, limit);
    let start = params.offset().min(items.len());
    let end = start.saturating_add(params.limit as usize).min(items.len());

    PaginatedResponse::new(
        items[start..end].to_vec(),
        PageMeta::new(items.len() as u64, params.page, params.limit),
    )
}
