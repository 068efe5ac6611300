//! Axum extractors for the HTTP API.
//!
//! All extractors reject malformed input with a [`RestError`](crate::error::RestError),
//! so clients always receive the JSON error body.
//!
//! - [`Pagination`] - `skip`/`limit` query parameters
//! - [`ValidQuery`] - Typed query parameters
//! - [`ValidJson`] - Typed JSON request bodies

mod json_body;
mod pagination;
mod query;

pub use json_body::ValidJson;
pub use pagination::Pagination;
pub(crate) use pagination::parse_integer;
pub use query::ValidQuery;
