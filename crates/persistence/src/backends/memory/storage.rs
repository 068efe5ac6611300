//! ArticleStorage and ItemStorage implementations for the memory backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::MemoryBackend;
use crate::core::{ArticleStorage, ItemStorage};
use crate::error::{StorageError, StorageResult};
use crate::search::{ArticleFilter, ItemFilter};
use crate::types::{Article, Item, ItemStats, ItemUpdate, NewItem, ThemeCount};

const ITEM: &str = "item";

#[async_trait]
impl ArticleStorage for MemoryBackend {
    async fn count_articles(&self, filter: &ArticleFilter) -> StorageResult<u64> {
        self.ensure_online()?;
        let articles = self.articles.read();
        Ok(articles.iter().filter(|a| filter.matches(a)).count() as u64)
    }

    async fn find_articles(
        &self,
        filter: &ArticleFilter,
        skip: u64,
        limit: u64,
    ) -> StorageResult<Vec<Article>> {
        self.ensure_online()?;
        let articles = self.articles.read();
        Ok(articles
            .iter()
            .filter(|a| filter.matches(a))
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn read_article(&self, id: &str) -> StorageResult<Option<Article>> {
        self.ensure_online()?;
        let articles = self.articles.read();
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn insert_article_if_absent(&self, article: Article) -> StorageResult<bool> {
        self.ensure_online()?;
        let mut articles = self.articles.write();
        if articles.iter().any(|a| a.id == article.id) {
            return Ok(false);
        }
        debug!(id = %article.id, "Inserted article");
        articles.push(article);
        Ok(true)
    }

    async fn distinct_themes(&self) -> StorageResult<Vec<String>> {
        Ok(self
            .theme_counts()
            .await?
            .into_iter()
            .map(|t| t.theme)
            .collect())
    }

    async fn theme_counts(&self) -> StorageResult<Vec<ThemeCount>> {
        self.ensure_online()?;
        let articles = self.articles.read();
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for article in articles.iter() {
            *counts.entry(article.theme.as_str()).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(theme, count)| ThemeCount {
                theme: theme.to_string(),
                count,
            })
            .collect())
    }
}

#[async_trait]
impl ItemStorage for MemoryBackend {
    async fn create_item(&self, item: NewItem) -> StorageResult<Item> {
        self.ensure_online()?;
        let item = Item::from_new(Uuid::new_v4().to_string(), item, Utc::now());
        self.items.write().push(item.clone());
        debug!(id = %item.id, "Created item");
        Ok(item)
    }

    async fn read_item(&self, id: &str) -> StorageResult<Option<Item>> {
        self.ensure_online()?;
        Ok(self.items.read().iter().find(|i| i.id == id).cloned())
    }

    async fn count_items(&self, filter: &ItemFilter) -> StorageResult<u64> {
        self.ensure_online()?;
        let items = self.items.read();
        Ok(items.iter().filter(|i| filter.matches(i)).count() as u64)
    }

    async fn find_items(
        &self,
        filter: &ItemFilter,
        skip: u64,
        limit: u64,
    ) -> StorageResult<Vec<Item>> {
        self.ensure_online()?;
        let items = self.items.read();
        Ok(items
            .iter()
            .filter(|i| filter.matches(i))
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update_item(&self, id: &str, update: ItemUpdate) -> StorageResult<Item> {
        self.ensure_online()?;
        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StorageError::not_found(ITEM, id))?;
        item.apply(update, Utc::now());
        Ok(item.clone())
    }

    async fn delete_item(&self, id: &str) -> StorageResult<()> {
        self.ensure_online()?;
        let mut items = self.items.write();
        let position = items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StorageError::not_found(ITEM, id))?;
        items.remove(position);
        Ok(())
    }

    async fn item_stats(&self) -> StorageResult<ItemStats> {
        self.ensure_online()?;
        let items = self.items.read();
        Ok(ItemStats::from_items(items.iter()))
    }
}
