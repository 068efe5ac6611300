//! Pagination extractor.
//!
//! Extracts the `skip` and `limit` query parameters of listing endpoints.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use logos_persistence::types::{PageBounds, PageRequest};
use serde::Deserialize;

use crate::error::RestError;

/// Axum extractor for pagination parameters.
///
/// Values are kept as given; [`Pagination::page`] clamps them into the
/// bounds of the endpoint. An empty value counts as absent, and integers
/// beyond the `i64` range saturate so they clamp like any other
/// out-of-range value. Only non-integer values are rejected with a 400.
///
/// # Example
///
/// ```rust,ignore
/// use logos_rest::extractors::Pagination;
/// use logos_persistence::types::PageBounds;
///
/// async fn list_handler(pagination: Pagination) {
///     let page = pagination.page(PageBounds::ARTICLES);
///     println!("skip {} limit {}", page.skip(), page.limit());
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Raw `skip` value.
    skip: Option<i64>,
    /// Raw `limit` value.
    limit: Option<i64>,
}

/// Query parameters for pagination.
#[derive(Debug, Deserialize)]
struct PaginationQuery {
    skip: Option<String>,
    limit: Option<String>,
}

impl Pagination {
    /// Creates a Pagination from raw values.
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Self {
        Self { skip, limit }
    }

    /// Returns the normalized window for an endpoint's bounds.
    pub fn page(&self, bounds: PageBounds) -> PageRequest {
        PageRequest::clamped(self.skip, self.limit, bounds)
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                RestError::bad_request(format!("Invalid pagination parameters: {}", e.body_text()))
            })?;

        Ok(Pagination::new(
            parse_integer("skip", query.skip.as_deref())?,
            parse_integer("limit", query.limit.as_deref())?,
        ))
    }
}

/// Parses an integer query value.
///
/// Empty means absent. Integers too large for `i64` saturate to
/// `i64::MAX` (or `i64::MIN` when negative).
pub(crate) fn parse_integer(name: &str, raw: Option<&str>) -> Result<Option<i64>, RestError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(Some(value));
    }

    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let saturated = if raw.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        };
        return Ok(Some(saturated));
    }

    Err(RestError::bad_request(format!(
        "Invalid pagination parameters: {} must be an integer, got '{}'",
        name, raw
    )))
}
