//! Offset pagination types.
//!
//! A [`PageRequest`] is the normalized `skip`/`limit` window of a listing
//! request. Callers may pass any integers: a negative `skip` becomes 0 and
//! `limit` is clamped into the `[1, max]` range of the [`PageBounds`] in use.
//! A [`Page`] carries the window's records plus the `total` match count and
//! the navigation flags derived from it.

use serde::Serialize;

/// Default and maximum page sizes of a listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Limit used when the caller gives none.
    pub default_limit: u64,
    /// Largest allowed limit.
    pub max_limit: u64,
}

impl PageBounds {
    /// Bounds of the article listing and search endpoints.
    pub const ARTICLES: PageBounds = PageBounds {
        default_limit: 10,
        max_limit: 50,
    };

    /// Bounds of the item listing endpoint.
    pub const ITEMS: PageBounds = PageBounds {
        default_limit: 10,
        max_limit: 100,
    };

    /// Clamps a caller supplied limit into `[1, max_limit]`.
    pub fn clamp_limit(&self, limit: Option<i64>) -> u64 {
        match limit {
            None => self.default_limit,
            Some(l) if l < 1 => 1,
            Some(l) => (l as u64).min(self.max_limit),
        }
    }
}

/// A normalized offset window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: u64,
    limit: u64,
}

impl PageRequest {
    /// Builds a window from raw caller values, clamping out-of-range input.
    pub fn clamped(skip: Option<i64>, limit: Option<i64>, bounds: PageBounds) -> Self {
        Self {
            skip: skip.unwrap_or(0).max(0) as u64,
            limit: bounds.clamp_limit(limit),
        }
    }

    /// Returns the number of records to skip.
    pub fn skip(&self) -> u64 {
        self.skip
    }

    /// Returns the maximum number of records in the page.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// True when records exist after this window.
    pub fn has_next(&self, total: u64) -> bool {
        self.skip.saturating_add(self.limit) < total
    }

    /// True when this window does not start at the first record.
    pub fn has_previous(&self) -> bool {
        self.skip > 0
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::clamped(None, None, PageBounds::ARTICLES)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// The records in this window.
    pub items: Vec<T>,
    /// Number of matching records before skip/limit.
    pub total: u64,
    /// The applied skip.
    pub skip: u64,
    /// The applied limit.
    pub limit: u64,
    /// More records follow this window.
    pub has_next: bool,
    /// Records precede this window.
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Assembles a page from the fetched window and the total match count.
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            skip: request.skip(),
            limit: request.limit(),
            has_next: request.has_next(total),
            has_previous: request.has_previous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = PageRequest::clamped(None, None, PageBounds::ARTICLES);
        assert_eq!(req.skip(), 0);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_limit_clamped_to_bounds() {
        assert_eq!(
            PageRequest::clamped(None, Some(500), PageBounds::ARTICLES).limit(),
            50
        );
        assert_eq!(
            PageRequest::clamped(None, Some(0), PageBounds::ARTICLES).limit(),
            1
        );
        assert_eq!(
            PageRequest::clamped(None, Some(-7), PageBounds::ARTICLES).limit(),
            1
        );
        assert_eq!(
            PageRequest::clamped(None, Some(500), PageBounds::ITEMS).limit(),
            100
        );
    }

    #[test]
    fn test_negative_skip_clamped() {
        let req = PageRequest::clamped(Some(-3), Some(5), PageBounds::ARTICLES);
        assert_eq!(req.skip(), 0);
        assert!(!req.has_previous());
    }

    #[test]
    fn test_flags_on_last_page() {
        let req = PageRequest::clamped(Some(15), Some(10), PageBounds::ARTICLES);
        assert!(!req.has_next(19));
        assert!(req.has_previous());
    }

    #[test]
    fn test_flags_on_first_page() {
        let req = PageRequest::clamped(Some(0), Some(10), PageBounds::ARTICLES);
        assert!(req.has_next(19));
        assert!(!req.has_previous());
    }

    #[test]
    fn test_exact_fit_has_no_next() {
        let req = PageRequest::clamped(Some(10), Some(10), PageBounds::ARTICLES);
        assert!(!req.has_next(20));
    }

    #[test]
    fn test_saturated_values_clamp() {
        let req = PageRequest::clamped(Some(i64::MAX), Some(i64::MAX), PageBounds::ARTICLES);
        assert_eq!(req.limit(), 50);
        assert_eq!(req.skip(), i64::MAX as u64);
        assert!(!req.has_next(19));
        assert!(req.has_previous());
    }
}
