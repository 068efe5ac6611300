//! Health check endpoint handler.
//!
//! Provides a health check endpoint for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use logos_persistence::core::ArticleStorage;
use logos_persistence::search::ArticleFilter;
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Pings the store and reports the number of stored articles.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Store reachable
/// - `503 Service Unavailable` - Store unreachable
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: ArticleStorage,
{
    debug!("Processing health check request");

    let storage = state.storage();
    let backend_name = storage.backend_name();
    let timestamp = chrono::Utc::now().to_rfc3339();

    let check = match storage.health_check().await {
        Ok(()) => storage.count_articles(&ArticleFilter::new()).await,
        Err(e) => Err(e),
    };

    match check {
        Ok(articles_count) => {
            let body = serde_json::json!({
                "status": "healthy",
                "database": "connected",
                "backend": backend_name,
                "articles_count": articles_count,
                "timestamp": timestamp,
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            warn!(backend = backend_name, error = %e, "Health check failed");
            let body = serde_json::json!({
                "status": "unhealthy",
                "database": "disconnected",
                "backend": backend_name,
                "detail": format!("Database connection failed: {}", e),
                "timestamp": timestamp,
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}
