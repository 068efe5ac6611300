//! Route table.

use axum::{
    Router,
    routing::{get, post},
};
use logos_persistence::core::{ArticleStorage, ItemStorage};

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// Collection paths answer with and without the trailing slash.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Service metadata
/// - `GET /health` - Store connectivity and article count
///
/// ## Articles
/// - `GET /articles/` - Paged listing
/// - `GET /articles/search` - Text search
/// - `GET /articles/themes/` - Distinct themes
/// - `POST /articles/upload` - Dataset upload
/// - `GET /articles/{id}` - Read
/// - `GET /stats/articles` - Counts by theme
///
/// ## Items
/// - `GET /items/` - Filtered, paged listing
/// - `POST /items/` - Create
/// - `GET /items/{id}` - Read
/// - `PUT /items/{id}` - Partial update
/// - `DELETE /items/{id}` - Delete
/// - `GET /stats/items` - Aggregates by category
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: ArticleStorage + ItemStorage + 'static,
{
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler::<S>))
        // Articles
        .route("/articles", get(handlers::list_articles_handler::<S>))
        .route("/articles/", get(handlers::list_articles_handler::<S>))
        .route(
            "/articles/search",
            get(handlers::search_articles_handler::<S>),
        )
        .route("/articles/themes", get(handlers::themes_handler::<S>))
        .route("/articles/themes/", get(handlers::themes_handler::<S>))
        .route("/articles/upload", post(handlers::upload_handler::<S>))
        .route("/articles/{id}", get(handlers::get_article_handler::<S>))
        .route(
            "/stats/articles",
            get(handlers::article_stats_handler::<S>),
        )
        // Items
        .route(
            "/items",
            get(handlers::list_items_handler::<S>).post(handlers::create_item_handler::<S>),
        )
        .route(
            "/items/",
            get(handlers::list_items_handler::<S>).post(handlers::create_item_handler::<S>),
        )
        .route(
            "/items/{id}",
            get(handlers::get_item_handler::<S>)
                .put(handlers::update_item_handler::<S>)
                .delete(handlers::delete_item_handler::<S>),
        )
        .route("/stats/items", get(handlers::item_stats_handler::<S>))
        .with_state(state)
}
