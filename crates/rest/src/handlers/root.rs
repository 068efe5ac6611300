//! Service metadata endpoint handler.

use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /`.
///
/// Describes the service and lists its main endpoints.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Logos articles API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API for multilingual articles with Tamil and English content",
        "endpoints": {
            "get_all_articles": "/articles/",
            "get_article_by_id": "/articles/{article_id}",
            "search_articles": "/articles/search",
            "get_themes": "/articles/themes/",
            "upload_articles": "/articles/upload",
            "article_stats": "/stats/articles",
            "items": "/items/",
            "item_stats": "/stats/items",
            "health_check": "/health",
        }
    }))
}
