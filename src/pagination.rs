//! Result pagination
//!
//! The engine is always queried without a limit so `total` reflects
//! every match; the page window is cut here.

use crate::error::{validate_limit, validate_page, AppError};
use serde::Serialize;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub limit: usize,
    /// 1-based page number
    pub page: usize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: 1,
        }
    }
}

impl Paging {
    /// Validate raw parameters, applying defaults for missing ones
    pub fn from_raw(limit: Option<i64>, page: Option<i64>) -> Result<Self, AppError> {
        Ok(Self {
            limit: limit.map(validate_limit).transpose()?.unwrap_or(DEFAULT_LIMIT),
            page: page.map(validate_page).transpose()?.unwrap_or(1),
        })
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`; zero when the limit is zero
    pub fn total_pages(&self, total: usize) -> usize {
        if self.limit == 0 {
            0
        } else {
            total.div_ceil(self.limit)
        }
    }
}

/// One page of results with the metadata callers need to page further
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub total: usize,
    pub total_pages: usize,
    pub limit: usize,
    pub page: usize,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Cut the requested window out of the full, ordered match list
    pub fn from_matches(matches: Vec<T>, paging: Paging) -> Self {
        let total = matches.len();
        let data = matches
            .into_iter()
            .skip(paging.offset())
            .take(paging.limit)
            .collect();

        Self {
            total,
            total_pages: paging.total_pages(total),
            limit: paging.limit,
            page: paging.page,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let paging = Paging::from_raw(None, None).unwrap();
        assert_eq!(paging, Paging::default());
        assert_eq!(paging.limit, 10);
        assert_eq!(paging.offset(), 0);
    }

    #[test]
    fn test_rejects_negative_limit_and_zero_page() {
        assert!(Paging::from_raw(Some(-1), None).is_err());
        assert!(Paging::from_raw(Some(5), Some(0)).is_err());
    }

    #[test]
    fn test_total_pages() {
        let paging = Paging { limit: 10, page: 1 };
        assert_eq!(paging.total_pages(0), 0);
        assert_eq!(paging.total_pages(10), 1);
        assert_eq!(paging.total_pages(11), 2);
        assert_eq!(Paging { limit: 0, page: 1 }.total_pages(11), 0);
    }

    #[test]
    fn test_first_page() {
        let matches: Vec<i32> = (1..=25).collect();
        let page = Page::from_matches(matches, Paging { limit: 10, page: 1 });
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_last_and_past_last_page() {
        let matches: Vec<i32> = (1..=25).collect();
        let page = Page::from_matches(matches.clone(), Paging { limit: 10, page: 3 });
        assert_eq!(page.data, vec![21, 22, 23, 24, 25]);

        let page = Page::from_matches(matches, Paging { limit: 10, page: 9 });
        assert!(page.data.is_empty());
        assert_eq!(page.total, 25);
    }

    #[test]
    fn test_zero_limit_page_is_empty() {
        let page = Page::from_matches(vec!["a", "b"], Paging { limit: 0, page: 1 });
        assert!(page.data.is_empty());
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 0);
    }
}
