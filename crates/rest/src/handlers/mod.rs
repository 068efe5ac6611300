//! HTTP request handlers.
//!
//! Each handler is generic over the storage backend and only requires the
//! storage trait it uses.
//!
//! | Endpoint | Handler |
//! |----------|---------|
//! | `GET /` | [`root_handler`] |
//! | `GET /health` | [`health_handler`] |
//! | `GET /articles/` | [`list_articles_handler`] |
//! | `GET /articles/{id}` | [`get_article_handler`] |
//! | `GET /articles/search` | [`search_articles_handler`] |
//! | `GET /articles/themes/` | [`themes_handler`] |
//! | `POST /articles/upload` | [`upload_handler`] |
//! | `GET /stats/articles` | [`article_stats_handler`] |
//! | `GET, POST /items/` | [`list_items_handler`], [`create_item_handler`] |
//! | `GET, PUT, DELETE /items/{id}` | [`get_item_handler`], [`update_item_handler`], [`delete_item_handler`] |
//! | `GET /stats/items` | [`item_stats_handler`] |

pub mod articles;
pub mod health;
pub mod items;
pub mod root;
pub mod stats;

pub use articles::{
    get_article_handler, list_articles_handler, search_articles_handler, themes_handler,
    upload_handler,
};
pub use health::health_handler;
pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    update_item_handler,
};
pub use root::root_handler;
pub use stats::{article_stats_handler, item_stats_handler};
