//! Typed JSON body extractor.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Axum extractor for JSON request bodies.
///
/// Rejects missing content types, syntax errors and shape mismatches with a
/// 400 [`RestError`].
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| RestError::bad_request(e.body_text()))?;
        Ok(ValidJson(value))
    }
}
