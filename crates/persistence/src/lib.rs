//! Logos Articles Persistence Layer
//!
//! This crate stores and queries the multilingual articles and the generic
//! items served by the Logos service. It defines the data model, the storage
//! traits every backend implements, the filter and pagination types used by
//! listing endpoints, and the article search engine.
//!
//! # Backend Features
//!
//! - memory (always available) - in-process store for tests and local runs
//! - `mongodb` - MongoDB document storage
//!
//! ```toml
//! [dependencies]
//! logos-persistence = { version = "0.1", features = ["mongodb"] }
//! ```
//!
//! # Architecture
//!
//! - [`types`] - Articles, items, pagination and statistics
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits and abstractions
//! - [`search`] - Filters, paged listing and article search
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use logos_persistence::backends::memory::MemoryBackend;
//! use logos_persistence::search::{ArticleFilter, SearchRequest, list_articles, search_articles};
//! use logos_persistence::types::{PageBounds, PageRequest};
//!
//! # async fn example() -> logos_persistence::StorageResult<()> {
//! let storage = MemoryBackend::new();
//!
//! let filter = ArticleFilter::new().with_theme(Some("gray"));
//! let page = PageRequest::clamped(Some(0), Some(10), PageBounds::ARTICLES);
//! let listing = list_articles(&storage, &filter, page).await?;
//! assert_eq!(listing.total, 0);
//!
//! let request = SearchRequest::parse(Some("grace"), Some("english"), None)?;
//! let found = search_articles(&storage, &request).await?;
//! assert!(found.articles.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Article, ArticleSummary, Item, Language, Page, PageRequest};

// Re-export core traits
pub use core::{ArticleStorage, Backend, BackendKind, ItemStorage};
