//! Backend abstraction for document stores.
//!
//! This module defines the [`Backend`] trait shared by every storage
//! implementation. The storage traits in [`crate::core::storage`] extend it,
//! so any store can report its kind and answer a health check.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::StorageResult;

/// Identifies the type of storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// In-process store.
    Memory,
    /// MongoDB (document store).
    MongoDB,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Memory => write!(f, "memory"),
            BackendKind::MongoDB => write!(f, "mongodb"),
        }
    }
}

/// A storage backend.
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Checks if the backend is reachable.
    ///
    /// # Errors
    ///
    /// * `BackendError::Unavailable` - If the store cannot be reached
    async fn health_check(&self) -> StorageResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_display() {
        assert_eq!(BackendKind::Memory.to_string(), "memory");
        assert_eq!(BackendKind::MongoDB.to_string(), "mongodb");
    }
}
