//! Error types for the persistence layer.
//!
//! This module defines all error types used throughout the persistence layer,
//! following a hierarchy that separates missing records, invalid input and
//! failures of the underlying document store.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to record state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested record was not found.
    #[error("{collection} not found: {id}")]
    NotFound { collection: String, id: String },
}

/// Errors related to input validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },

    /// A field holds a value outside its allowed range or format.
    #[error("invalid value for '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// A query parameter is invalid.
    #[error("invalid query parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// An update carried no fields.
    #[error("no fields to update")]
    EmptyUpdate,
}

/// Errors originating from the document store.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

impl BackendError {
    /// Returns true when the error means the store could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. }
        )
    }
}

impl StorageError {
    /// Shorthand for a missing record.
    pub fn not_found(collection: &str, id: &str) -> Self {
        StorageError::Resource(ResourceError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        })
    }

    /// Shorthand for an invalid query parameter.
    pub fn invalid_parameter(parameter: &str, message: impl Into<String>) -> Self {
        StorageError::Validation(ValidationError::InvalidParameter {
            parameter: parameter.to_string(),
            message: message.into(),
        })
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
