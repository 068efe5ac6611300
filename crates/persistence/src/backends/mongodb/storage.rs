//! ArticleStorage and ItemStorage implementations for MongoDB.

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, Document, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use tracing::{debug, error};

use super::MongoBackend;
use super::backend::{is_duplicate_key, map_bson_error, map_mongo_error};
use super::query::{article_query, item_query, number};
use crate::core::{ArticleStorage, ItemStorage};
use crate::error::{StorageError, StorageResult};
use crate::search::{ArticleFilter, ItemFilter};
use crate::types::{
    Article, CategoryStats, Item, ItemCategory, ItemStats, ItemUpdate, NewItem, ThemeCount,
    round_cents,
};

const ITEM: &str = "item";

fn insertion_order() -> Document {
    doc! { "_id": 1 }
}

#[async_trait]
impl ArticleStorage for MongoBackend {
    async fn count_articles(&self, filter: &ArticleFilter) -> StorageResult<u64> {
        self.articles
            .count_documents(article_query(filter))
            .await
            .map_err(map_mongo_error)
    }

    async fn find_articles(
        &self,
        filter: &ArticleFilter,
        skip: u64,
        limit: u64,
    ) -> StorageResult<Vec<Article>> {
        let cursor = self
            .articles
            .find(article_query(filter))
            .sort(insertion_order())
            .skip(skip)
            .limit(limit as i64)
            .await
            .map_err(map_mongo_error)?;
        cursor.try_collect().await.map_err(map_mongo_error)
    }

    async fn read_article(&self, id: &str) -> StorageResult<Option<Article>> {
        self.articles
            .find_one(doc! { "id": id })
            .await
            .map_err(map_mongo_error)
    }

    async fn insert_article_if_absent(&self, article: Article) -> StorageResult<bool> {
        let record = bson::to_document(&article).map_err(map_bson_error)?;
        let result = self
            .articles
            .update_one(doc! { "id": article.id.as_str() }, doc! { "$setOnInsert": record })
            .upsert(true)
            .await;

        match result {
            Ok(outcome) => {
                let inserted = outcome.upserted_id.is_some();
                if inserted {
                    debug!(id = %article.id, "Inserted article");
                }
                Ok(inserted)
            }
            // A concurrent upsert of the same id won the race.
            Err(e) if is_duplicate_key(&e) => Ok(false),
            Err(e) => {
                error!(id = %article.id, error = %e, "Article upsert failed");
                Err(map_mongo_error(e))
            }
        }
    }

    async fn distinct_themes(&self) -> StorageResult<Vec<String>> {
        let values = self
            .articles
            .distinct("theme", doc! {})
            .await
            .map_err(map_mongo_error)?;
        let mut themes: Vec<String> = values
            .into_iter()
            .filter_map(|v| match v {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect();
        themes.sort();
        Ok(themes)
    }

    async fn theme_counts(&self) -> StorageResult<Vec<ThemeCount>> {
        let pipeline = vec![
            doc! { "$group": { "_id": "$theme", "count": { "$sum": 1 } } },
            doc! { "$sort": { "_id": 1 } },
        ];
        let groups: Vec<Document> = self
            .articles
            .aggregate(pipeline)
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;

        Ok(groups
            .iter()
            .filter_map(|group| {
                let theme = group.get_str("_id").ok()?;
                Some(ThemeCount {
                    theme: theme.to_string(),
                    count: number(group.get("count")) as u64,
                })
            })
            .collect())
    }
}

#[async_trait]
impl ItemStorage for MongoBackend {
    async fn create_item(&self, item: NewItem) -> StorageResult<Item> {
        let item = Item::from_new(ObjectId::new().to_hex(), item, Utc::now());
        self.items
            .insert_one(&item)
            .await
            .map_err(map_mongo_error)?;
        debug!(id = %item.id, "Created item");
        Ok(item)
    }

    async fn read_item(&self, id: &str) -> StorageResult<Option<Item>> {
        self.items
            .find_one(doc! { "id": id })
            .await
            .map_err(map_mongo_error)
    }

    async fn count_items(&self, filter: &ItemFilter) -> StorageResult<u64> {
        self.items
            .count_documents(item_query(filter))
            .await
            .map_err(map_mongo_error)
    }

    async fn find_items(
        &self,
        filter: &ItemFilter,
        skip: u64,
        limit: u64,
    ) -> StorageResult<Vec<Item>> {
        let cursor = self
            .items
            .find(item_query(filter))
            .sort(insertion_order())
            .skip(skip)
            .limit(limit as i64)
            .await
            .map_err(map_mongo_error)?;
        cursor.try_collect().await.map_err(map_mongo_error)
    }

    async fn update_item(&self, id: &str, update: ItemUpdate) -> StorageResult<Item> {
        let mut changes: Document = bson::to_document(&update)
            .map_err(map_bson_error)?
            .into_iter()
            .filter(|(_, value)| !matches!(value, Bson::Null))
            .collect();
        changes.insert(
            "updated_at",
            bson::to_bson(&Utc::now()).map_err(map_bson_error)?,
        );

        self.items
            .find_one_and_update(doc! { "id": id }, doc! { "$set": changes })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo_error)?
            .ok_or_else(|| StorageError::not_found(ITEM, id))
    }

    async fn delete_item(&self, id: &str) -> StorageResult<()> {
        let result = self
            .items
            .delete_one(doc! { "id": id })
            .await
            .map_err(map_mongo_error)?;
        if result.deleted_count == 0 {
            return Err(StorageError::not_found(ITEM, id));
        }
        Ok(())
    }

    async fn item_stats(&self) -> StorageResult<ItemStats> {
        let pipeline = vec![
            doc! {
                "$group": {
                    "_id": "$category",
                    "count": { "$sum": 1 },
                    "total_value": { "$sum": { "$multiply": ["$price", "$quantity"] } },
                    "avg_price": { "$avg": "$price" },
                }
            },
            doc! { "$sort": { "_id": 1 } },
        ];
        let groups: Vec<Document> = self
            .items
            .aggregate(pipeline)
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;

        let mut by_category = Vec::with_capacity(groups.len());
        for group in &groups {
            let category: ItemCategory = group
                .get_str("_id")
                .map_err(map_bson_error)?
                .parse()?;
            by_category.push(CategoryStats {
                category,
                count: number(group.get("count")) as u64,
                total_value: round_cents(number(group.get("total_value"))),
                avg_price: round_cents(number(group.get("avg_price"))),
            });
        }
        by_category.sort_by_key(|c| c.category);

        let total_items = self
            .items
            .count_documents(doc! {})
            .await
            .map_err(map_mongo_error)?;
        let active_items = self
            .items
            .count_documents(doc! { "is_active": true })
            .await
            .map_err(map_mongo_error)?;

        Ok(ItemStats {
            total_items,
            active_items,
            inactive_items: total_items.saturating_sub(active_items),
            by_category,
        })
    }
}
