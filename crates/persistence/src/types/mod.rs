//! Core types for the persistence layer.
//!
//! - [`Article`], [`ArticleSummary`], [`ContentBlock`], [`Language`] - The article model
//! - [`Item`], [`NewItem`], [`ItemUpdate`], [`ItemCategory`] - The item model
//! - [`PageRequest`], [`Page`] - Offset pagination
//! - [`ArticleStats`], [`ItemStats`] - Collection statistics
//!
//! # Examples
//!
//! ```
//! use logos_persistence::types::{PageBounds, PageRequest};
//!
//! let page = PageRequest::clamped(Some(-5), Some(500), PageBounds::ARTICLES);
//! assert_eq!(page.skip(), 0);
//! assert_eq!(page.limit(), 50);
//! ```

mod article;
mod item;
mod pagination;
mod stats;

pub use article::{
    Article, ArticleSummary, ContentBlock, ContentType, EXCERPT_MAX_CHARS, Language, excerpt,
};
pub use item::{
    Item, ItemCategory, ItemUpdate, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS, NewItem,
};
pub use pagination::{Page, PageBounds, PageRequest};
pub use stats::{ArticleStats, CategoryStats, ItemStats, ThemeCount, round_cents};
