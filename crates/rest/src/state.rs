//! Application state shared by all handlers.

use std::path::Path;
use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state.
///
/// Generic over the storage backend `S`; handlers add the storage trait
/// bounds they need. Cloning is cheap since both fields are reference counted.
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S> AppState<S> {
    /// Creates a new application state.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the dataset file read by the upload endpoint.
    pub fn dataset_path(&self) -> &Path {
        &self.config.dataset_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos_persistence::backends::memory::MemoryBackend;
    use logos_persistence::core::Backend;
    use std::path::PathBuf;

    #[test]
    fn test_app_state_creation() {
        let storage = Arc::new(MemoryBackend::new());
        let state = AppState::new(storage, ServerConfig::default());

        assert_eq!(state.storage().backend_name(), "memory");
        assert_eq!(state.dataset_path(), Path::new("content.json"));
    }

    #[test]
    fn test_app_state_config_access() {
        let storage = Arc::new(MemoryBackend::new());
        let config = ServerConfig {
            dataset_path: PathBuf::from("/data/pages.json"),
            request_timeout: 10,
            ..Default::default()
        };
        let state = AppState::new(storage, config);

        assert_eq!(state.dataset_path(), Path::new("/data/pages.json"));
        assert_eq!(state.config().request_timeout, 10);
    }

    #[test]
    fn test_app_state_clone() {
        let storage = Arc::new(MemoryBackend::new());
        let state = AppState::new(storage, ServerConfig::default());
        let cloned = state.clone();

        assert!(std::ptr::eq(state.storage(), cloned.storage()));
    }
}
