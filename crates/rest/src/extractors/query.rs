//! Typed query string extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Axum extractor for typed query parameters.
///
/// Works like [`axum::extract::Query`] but rejects with a 400
/// [`RestError`] naming the offending parameter.
///
/// # Example
///
/// ```rust,ignore
/// use logos_rest::extractors::ValidQuery;
///
/// #[derive(serde::Deserialize)]
/// struct Filter { theme: Option<String> }
///
/// async fn handler(ValidQuery(filter): ValidQuery<Filter>) {}
/// ```
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::bad_request(e.body_text()))?;
        Ok(ValidQuery(value))
    }
}
