//! Storage traits for articles and items.
//!
//! [`ArticleStorage`] is the read-mostly contract behind the article
//! endpoints: counting and windowed fetching under an [`ArticleFilter`],
//! lookup by id, and insert-if-absent for bulk upload. [`ItemStorage`] is a
//! plain CRUD contract with server-assigned ids.
//!
//! Listings are returned in insertion order so that offset pagination is
//! stable across requests.
//!
//! # Example
//!
//! ```ignore
//! use logos_persistence::core::ArticleStorage;
//! use logos_persistence::search::ArticleFilter;
//!
//! async fn first_gray<S: ArticleStorage>(storage: &S) -> StorageResult<()> {
//!     let filter = ArticleFilter::new().with_theme(Some("gray"));
//!     let total = storage.count_articles(&filter).await?;
//!     let first = storage.find_articles(&filter, 0, 10).await?;
//!     println!("{} of {}", first.len(), total);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

use super::backend::Backend;
use crate::error::StorageResult;
use crate::search::{ArticleFilter, ItemFilter};
use crate::types::{Article, Item, ItemStats, ItemUpdate, NewItem, ThemeCount};

/// Storage contract for articles.
#[async_trait]
pub trait ArticleStorage: Backend {
    /// Counts the articles matching `filter`.
    async fn count_articles(&self, filter: &ArticleFilter) -> StorageResult<u64>;

    /// Returns up to `limit` matching articles after skipping `skip`, in
    /// insertion order.
    async fn find_articles(
        &self,
        filter: &ArticleFilter,
        skip: u64,
        limit: u64,
    ) -> StorageResult<Vec<Article>>;

    /// Reads an article by its external id.
    async fn read_article(&self, id: &str) -> StorageResult<Option<Article>>;

    /// Inserts `article` unless an article with the same id exists.
    ///
    /// Returns `true` when the article was inserted. The check and the
    /// insert are a single atomic step.
    async fn insert_article_if_absent(&self, article: Article) -> StorageResult<bool>;

    /// Returns the distinct themes, sorted ascending.
    async fn distinct_themes(&self) -> StorageResult<Vec<String>>;

    /// Returns the number of articles per theme, sorted by theme.
    async fn theme_counts(&self) -> StorageResult<Vec<ThemeCount>>;
}

/// Storage contract for items.
#[async_trait]
pub trait ItemStorage: Backend {
    /// Stores a new item under a fresh id.
    ///
    /// The caller validates `item` beforehand.
    async fn create_item(&self, item: NewItem) -> StorageResult<Item>;

    /// Reads an item. Ids this store could never have issued read as absent.
    async fn read_item(&self, id: &str) -> StorageResult<Option<Item>>;

    /// Counts the items matching `filter`.
    async fn count_items(&self, filter: &ItemFilter) -> StorageResult<u64>;

    /// Returns a window of matching items in insertion order.
    async fn find_items(
        &self,
        filter: &ItemFilter,
        skip: u64,
        limit: u64,
    ) -> StorageResult<Vec<Item>>;

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no item has this id
    async fn update_item(&self, id: &str, update: ItemUpdate) -> StorageResult<Item>;

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no item has this id
    async fn delete_item(&self, id: &str) -> StorageResult<()>;

    /// Computes item statistics.
    async fn item_stats(&self) -> StorageResult<ItemStats>;
}
