//! Logos server
//!
//! Serves multilingual Tamil/English articles and a sample item catalogue.

use clap::Parser;
use logos_persistence::backends::memory::MemoryBackend;
use logos_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use tracing::{info, warn};

/// Starts the Axum HTTP server and stops on Ctrl-C.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %config.storage_backend,
        dataset = %config.dataset_path.display(),
        "Starting Logos server"
    );

    match config.storage_backend {
        StorageBackendMode::MongoDB => start_mongodb(config).await,
        StorageBackendMode::Memory => start_memory(config).await,
    }
}

/// Starts the server with the in-memory backend.
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    warn!("Using the in-memory backend; data is lost on shutdown");
    let app = create_app_with_config(MemoryBackend::new(), config.clone());
    serve(app, &config).await
}

/// Starts the server with the MongoDB backend.
///
/// An unreachable database does not prevent startup; requests fail with 503
/// until it becomes reachable.
#[cfg(feature = "mongodb")]
async fn start_mongodb(config: ServerConfig) -> anyhow::Result<()> {
    use logos_persistence::Backend;
    use logos_persistence::backends::mongodb::MongoBackend;

    info!(database = %config.database_name, "Initializing MongoDB backend");
    let backend = MongoBackend::connect(&config.mongodb_url, &config.database_name).await?;

    match backend.health_check().await {
        Ok(()) => {
            info!("Connected to MongoDB");
            if let Err(e) = backend.init_indexes().await {
                warn!(error = %e, "Failed to create indexes");
            }
        }
        Err(e) => warn!(error = %e, "MongoDB is not reachable yet"),
    }

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when the mongodb feature is not enabled.
#[cfg(not(feature = "mongodb"))]
async fn start_mongodb(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The mongodb backend requires the 'mongodb' feature. \
         Build with: cargo build -p logos-server --features mongodb, \
         or set LOGOS_STORAGE_BACKEND=memory"
    )
}
