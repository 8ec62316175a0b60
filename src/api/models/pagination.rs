//! Shared pagination types for API query parameters.
//!
//! List endpoints use 1-based page-number pagination with bracketed query
//! parameters (`page[number]`, `page[size]`), matching what the frontend's
//! data layer sends. Omitting `page[number]` returns the whole filtered set
//! with an implied page 1.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use utoipa::{IntoParams, ToSchema};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page-number pagination parameters.
///
/// Query string values arrive as strings, hence the `DisplayFromStr` bridging.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PageParams {
    /// 1-based page number. Omit to fetch the whole collection.
    #[serde(rename = "page[number]")]
    #[param(minimum = 1)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub number: Option<i64>,

    /// Items per page (default: 10)
    #[serde(rename = "page[size]")]
    #[param(default = 10, minimum = 1)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub size: Option<i64>,
}

impl PageParams {
    /// Page size, defaulting to [`DEFAULT_PAGE_SIZE`] and clamped to at least 1.
    #[inline]
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    /// Requested page number clamped to at least 1, defaulting to 1.
    #[inline]
    pub fn current_page(&self) -> i64 {
        self.number.unwrap_or(1).max(1)
    }

    /// Slice `items` down to the requested page and attach summary counts.
    ///
    /// With no page number the full set is returned unsliced, reported as
    /// page 1.
    pub fn paginate<T>(&self, items: Vec<T>) -> PaginatedResponse<T> {
        let total_records = items.len() as i64;
        let page_size = self.size();
        // Ceiling division; total_records >= 0 and page_size >= 1
        let total_pages = (total_records + page_size - 1) / page_size;
        let current_page = self.current_page();

        let data = if self.number.is_some() {
            let start = ((current_page - 1) * page_size) as usize;
            items.into_iter().skip(start).take(page_size as usize).collect()
        } else {
            items
        };

        PaginatedResponse {
            data,
            meta: PageMeta {
                total_records,
                total_pages,
                page_size,
                current_page,
            },
        }
    }
}

/// Summary counts attached to paginated list responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    /// Total number of items matching the query (before slicing)
    pub total_records: i64,
    /// Number of pages at the current page size
    pub total_pages: i64,
    /// Items per page
    pub page_size: i64,
    /// 1-based page number of this response
    pub current_page: i64,
}

/// Generic paginated response wrapper for list endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// The items for the current page
    pub data: Vec<T>,
    /// Summary counts for client-side pagination
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(number: Option<i64>, size: Option<i64>) -> PageParams {
        PageParams { number, size }
    }

    #[test]
    fn test_default_values() {
        let p = PageParams::default();
        assert_eq!(p.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_paginate_slices_and_counts() {
        let items: Vec<i64> = (1..=25).collect();
        let page = params(Some(3), Some(10)).paginate(items);
        assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.meta.total_records, 25);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.page_size, 10);
        assert_eq!(page.meta.current_page, 3);
    }

    #[test]
    fn test_paginate_without_number_returns_everything() {
        let items: Vec<i64> = (1..=25).collect();
        let page = params(None, None).paginate(items);
        assert_eq!(page.data.len(), 25);
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let items: Vec<i64> = (1..=5).collect();
        let page = params(Some(4), Some(2)).paginate(items);
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_page_number_clamped_to_one() {
        let items: Vec<i64> = (1..=5).collect();
        let page = params(Some(0), Some(2)).paginate(items);
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.meta.current_page, 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let exact = params(None, Some(10)).paginate((1..=20).collect::<Vec<i64>>());
        assert_eq!(exact.meta.total_pages, 2);

        let partial = params(None, Some(10)).paginate((1..=21).collect::<Vec<i64>>());
        assert_eq!(partial.meta.total_pages, 3);

        let empty = params(None, Some(10)).paginate(Vec::<i64>::new());
        assert_eq!(empty.meta.total_pages, 0);
    }

    #[test]
    fn test_bracketed_query_parsing() {
        let p: PageParams = serde_urlencoded::from_str("page[number]=2&page[size]=5").unwrap();
        assert_eq!(p.number, Some(2));
        assert_eq!(p.size, Some(5));
    }
}
