//! MongoDB backend implementation.
//!
//! Articles and items live in two collections of one database. Records are
//! stored through their serde representation (timestamps as RFC 3339
//! strings) and addressed by their `id` field, which carries a unique index.
//! Listings sort on `_id`, whose ObjectIds grow with insertion order.
//!
//! # Indexes
//!
//! | Collection | Index |
//! |------------|-------|
//! | `articles` | `id` (unique), `theme` |
//! | `items` | `id` (unique), `name`, `category`, `price`, `tags` |
//!
//! # Example
//!
//! ```no_run
//! use logos_persistence::backends::mongodb::MongoBackend;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = MongoBackend::connect("mongodb://localhost:27017", "fastapi_db").await?;
//! backend.init_indexes().await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod query;
mod storage;

pub use backend::{ARTICLES_COLLECTION, ITEMS_COLLECTION, MongoBackend};
