//! HTTP API test harness.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use logos_persistence::backends::memory::MemoryBackend;
use logos_rest::{AppState, ServerConfig, routing};
use serde_json::Value;

use super::fixtures;

/// A test server over a shared in-memory store.
///
/// # Example
///
/// ```rust,ignore
/// let harness = TestHarness::with_articles();
/// let response = harness.get("/articles/weakness").await;
/// assert_eq!(response.status_code(), 200);
/// ```
pub struct TestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend, shared with the server.
    pub backend: Arc<MemoryBackend>,
}

impl TestHarness {
    /// Creates a harness over an empty store.
    pub fn new() -> Self {
        Self::with_config(MemoryBackend::new(), ServerConfig::for_testing())
    }

    /// Creates a harness over the standard article fixtures.
    pub fn with_articles() -> Self {
        Self::with_config(
            MemoryBackend::with_articles(fixtures::articles()),
            ServerConfig::for_testing(),
        )
    }

    /// Creates a harness with explicit store and configuration.
    pub fn with_config(backend: MemoryBackend, config: ServerConfig) -> Self {
        let backend = Arc::new(backend);
        let state = AppState::new(Arc::clone(&backend), config);
        let app = routing::create_routes(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, backend }
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.server.post(path).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        self.server.post(path).json(body).await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        self.server.put(path).json(body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).await
    }
}
