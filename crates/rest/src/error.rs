//! Error types for the Logos HTTP API.
//!
//! Every error is rendered as a JSON body `{"error": code, "detail": message}`.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are automatically mapped to
//! appropriate HTTP status codes and error codes:
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | NotFound | 404 | not_found |
//! | ValidationError | 400 | validation_error |
//! | Unavailable, ConnectionFailed | 503 | upstream_unavailable |
//! | other BackendError | 500 | internal_error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use logos_persistence::error::{BackendError, ResourceError, StorageError, ValidationError};
use std::fmt;
use tracing::error;

/// The primary error type for HTTP API operations.
#[derive(Debug)]
pub enum RestError {
    /// Record or file not found (HTTP 404).
    NotFound {
        /// What was looked up (e.g., "article").
        resource: String,
        /// The id or path that was not found.
        id: String,
    },

    /// Bad request - validation error (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The document store cannot be reached (HTTP 503).
    Unavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Shorthand for a validation failure.
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }

    /// Returns the HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } => "not_found",
            RestError::BadRequest { .. } => "validation_error",
            RestError::Unavailable { .. } => "upstream_unavailable",
            RestError::InternalError { .. } => "internal_error",
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", capitalize(resource), id)
            }
            RestError::BadRequest { message } => write!(f, "{}", message),
            RestError::Unavailable { message } => {
                write!(f, "Database unavailable: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        }
        let body = serde_json::json!({
            "error": self.code(),
            "detail": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { collection, id } => RestError::NotFound {
                resource: collection,
                id,
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        if err.is_unavailable() {
            RestError::Unavailable {
                message: err.to_string(),
            }
        } else {
            RestError::InternalError {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            resource: "article".to_string(),
            id: "doesnotexist".to_string(),
        };
        assert_eq!(err.to_string(), "Article not found: doesnotexist");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err: RestError = StorageError::not_found("item", "abc").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err: RestError = StorageError::invalid_parameter("language", "bad").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "validation_error");
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let err: RestError = StorageError::Backend(BackendError::Unavailable {
            backend_name: "mongodb".to_string(),
            message: "no server".to_string(),
        })
        .into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "upstream_unavailable");
    }

    #[test]
    fn test_query_error_maps_to_500() {
        let err: RestError = StorageError::Backend(BackendError::QueryError {
            message: "bad".to_string(),
        })
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_body() {
        let response = RestError::bad_request("q is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
