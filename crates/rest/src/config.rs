//! Server configuration for the Logos HTTP API.
//!
//! This module provides configuration types for the server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LOGOS_SERVER_PORT` | 8000 | Server port |
//! | `LOGOS_SERVER_HOST` | 0.0.0.0 | Host to bind |
//! | `LOGOS_LOG_LEVEL` | info | Log level |
//! | `LOGOS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `LOGOS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `LOGOS_ENABLE_CORS` | true | Enable CORS |
//! | `LOGOS_CORS_ORIGINS` | * | Allowed origins |
//! | `LOGOS_CORS_METHODS` | * | Allowed methods |
//! | `LOGOS_CORS_HEADERS` | * | Allowed headers |
//! | `LOGOS_ENABLE_REQUEST_ID` | true | Set and propagate `x-request-id` |
//! | `LOGOS_STORAGE_BACKEND` | mongodb | `mongodb` or `memory` |
//! | `MONGODB_URL` | mongodb://localhost:27017 | MongoDB connection string |
//! | `DATABASE_NAME` | fastapi_db | MongoDB database name |
//! | `LOGOS_DATASET_PATH` | content.json | Dataset file loaded by upload |
//!
//! # Example
//!
//! ```rust
//! use logos_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     enable_cors: false,
//!     ..Default::default()
//! };
//! ```

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which storage backend the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendMode {
    /// MongoDB reached through `MONGODB_URL`.
    #[value(name = "mongodb")]
    MongoDB,
    /// In-process store; contents are lost on exit.
    Memory,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::MongoDB => write!(f, "mongodb"),
            StorageBackendMode::Memory => write!(f, "memory"),
        }
    }
}

/// Server configuration for the Logos HTTP API.
///
/// This struct can be constructed from command line arguments and environment
/// variables using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "logos")]
#[command(about = "Multilingual articles HTTP service")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "LOGOS_SERVER_PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "LOGOS_SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "LOGOS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "LOGOS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "LOGOS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "LOGOS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "LOGOS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "LOGOS_CORS_METHODS", default_value = "*")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "LOGOS_CORS_HEADERS", default_value = "*")]
    pub cors_headers: String,

    /// Enable request ID tracking.
    #[arg(long, env = "LOGOS_ENABLE_REQUEST_ID", default_value = "true")]
    pub enable_request_id: bool,

    /// Storage backend.
    #[arg(long, env = "LOGOS_STORAGE_BACKEND", value_enum, default_value = "mongodb")]
    pub storage_backend: StorageBackendMode,

    /// MongoDB connection string.
    #[arg(long, env = "MONGODB_URL", default_value = "mongodb://localhost:27017")]
    pub mongodb_url: String,

    /// MongoDB database name.
    #[arg(long, env = "DATABASE_NAME", default_value = "fastapi_db")]
    pub database_name: String,

    /// Dataset file read by `POST /articles/upload`.
    #[arg(long, env = "LOGOS_DATASET_PATH", default_value = "content.json")]
    pub dataset_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            enable_request_id: true,
            storage_backend: StorageBackendMode::MongoDB,
            mongodb_url: "mongodb://localhost:27017".to_string(),
            database_name: "fastapi_db".to_string(),
            dataset_path: PathBuf::from("content.json"),
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.storage_backend == StorageBackendMode::MongoDB {
            if !self.mongodb_url.starts_with("mongodb://")
                && !self.mongodb_url.starts_with("mongodb+srv://")
            {
                errors.push(format!(
                    "MongoDB URL must start with mongodb:// or mongodb+srv://, got '{}'",
                    self.mongodb_url
                ));
            }
            if self.database_name.trim().is_empty() {
                errors.push("Database name cannot be empty".to_string());
            }
        }

        if self.dataset_path.as_os_str().is_empty() {
            errors.push("Dataset path cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, the memory backend, and disables features
    /// that might interfere with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            enable_request_id: false,
            storage_backend: StorageBackendMode::Memory,
            mongodb_url: "mongodb://localhost:27017".to_string(),
            database_name: "logos_test".to_string(),
            dataset_path: PathBuf::from("content.json"),
        }
    }
}
