//! Filtering, paging and article search.
//!
//! - [`filter`] - [`ArticleFilter`] and [`ItemFilter`] predicates evaluated by every backend
//! - [`engine`] - Paged listing and text search composed from the storage traits
//!
//! # Example
//!
//! ```ignore
//! use logos_persistence::search::{ArticleFilter, list_articles};
//! use logos_persistence::types::{PageBounds, PageRequest};
//!
//! let filter = ArticleFilter::new()
//!     .with_theme(Some("gray"))
//!     .with_search(Some("grace"), None);
//! let page = list_articles(&storage, &filter, PageRequest::clamped(Some(0), Some(10), PageBounds::ARTICLES)).await?;
//! println!("{} of {}", page.items.len(), page.total);
//! ```

pub mod engine;
pub mod filter;

pub use engine::{SearchOutcome, SearchRequest, list_articles, list_items, search_articles};
pub use filter::{ArticleFilter, ItemFilter, MAX_SEARCH_LENGTH, TextQuery, non_empty, parse_tags};
