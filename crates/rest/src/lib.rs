//! # logos-rest - HTTP API for multilingual articles
//!
//! This crate serves Tamil/English articles and a generic item catalogue
//! over HTTP. It is backed by any storage implementing the
//! [`ArticleStorage`] and [`ItemStorage`] traits from `logos-persistence`.
//!
//! ## Backend Support
//!
//! - in-memory (always available, used by tests)
//! - `mongodb` - MongoDB backend (feature flag)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clap::Parser;
//! use logos_rest::{create_app_with_config, ServerConfig};
//! use logos_persistence::backends::memory::MemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::parse();
//!     let app = create_app_with_config(MemoryBackend::new(), config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | metadata | GET | `/` |
//! | health | GET | `/health` |
//! | list articles | GET | `/articles/?skip=&limit=&theme=&search=` |
//! | read article | GET | `/articles/{id}` |
//! | search | GET | `/articles/search?q=&language=&limit=` |
//! | themes | GET | `/articles/themes/` |
//! | upload | POST | `/articles/upload` |
//! | article stats | GET | `/stats/articles` |
//! | items | GET/POST | `/items/` |
//! | item | GET/PUT/DELETE | `/items/{id}` |
//! | item stats | GET | `/stats/items` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": <code>, "detail": <message>}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | `validation_error` | Bad parameter or body |
//! | 404 | `not_found` | Unknown article, item or dataset file |
//! | 500 | `internal_error` | Unexpected failure |
//! | 503 | `upstream_unavailable` | Store unreachable |
//!
//! ## Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LOGOS_SERVER_PORT` | 8000 | Server port |
//! | `LOGOS_SERVER_HOST` | 0.0.0.0 | Host to bind |
//! | `LOGOS_LOG_LEVEL` | info | Log level |
//! | `LOGOS_STORAGE_BACKEND` | mongodb | `mongodb` or `memory` |
//! | `MONGODB_URL` | mongodb://localhost:27017 | MongoDB connection string |
//! | `DATABASE_NAME` | fastapi_db | MongoDB database |
//! | `LOGOS_DATASET_PATH` | content.json | Dataset file for uploads |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`dataset`] - Dataset file parsing and upload
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Query, pagination and body extractors
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::DefaultBodyLimit, http::StatusCode};
use logos_persistence::core::{ArticleStorage, ItemStorage};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: ArticleStorage + ItemStorage + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use logos_rest::{create_app_with_config, ServerConfig};
/// use logos_persistence::backends::memory::MemoryBackend;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: ArticleStorage + ItemStorage + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(Arc::new(storage), config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ))
        .layer(DefaultBodyLimit::max(config.max_body_size));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    let router = router.layer(service_builder);

    if config.enable_request_id {
        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    } else {
        router
    }
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "logos_rest={level},logos_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
