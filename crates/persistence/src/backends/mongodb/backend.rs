//! MongoDB connection, indexes and error mapping.

use std::fmt::Debug;

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::{debug, info};

use crate::core::{Backend, BackendKind};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::{Article, Item};

/// Name of the article collection.
pub const ARTICLES_COLLECTION: &str = "articles";

/// Name of the item collection.
pub const ITEMS_COLLECTION: &str = "items";

const BACKEND_NAME: &str = "mongodb";

const DUPLICATE_KEY: i32 = 11000;

/// MongoDB backend for articles and items.
#[derive(Clone)]
pub struct MongoBackend {
    database: Database,
    pub(super) articles: Collection<Article>,
    pub(super) items: Collection<Item>,
}

impl Debug for MongoBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoBackend")
            .field("database", &self.database.name())
            .finish_non_exhaustive()
    }
}

impl MongoBackend {
    /// Creates a client for `url` and binds the named database.
    ///
    /// The driver connects lazily; use [`Backend::health_check`] to find out
    /// whether the server is reachable.
    pub async fn connect(url: &str, database_name: &str) -> StorageResult<Self> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| BackendError::ConnectionFailed {
                backend_name: BACKEND_NAME.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::with_database(client.database(database_name)))
    }

    /// Wraps an existing database handle.
    pub fn with_database(database: Database) -> Self {
        Self {
            articles: database.collection(ARTICLES_COLLECTION),
            items: database.collection(ITEMS_COLLECTION),
            database,
        }
    }

    /// Creates the collection indexes. Existing indexes are left as they are.
    pub async fn init_indexes(&self) -> StorageResult<()> {
        let articles = self.database.collection::<Document>(ARTICLES_COLLECTION);
        articles
            .create_index(index(doc! { "id": 1 }, true))
            .await
            .map_err(map_mongo_error)?;
        articles
            .create_index(index(doc! { "theme": 1 }, false))
            .await
            .map_err(map_mongo_error)?;

        let items = self.database.collection::<Document>(ITEMS_COLLECTION);
        items
            .create_index(index(doc! { "id": 1 }, true))
            .await
            .map_err(map_mongo_error)?;
        for field in ["name", "category", "price", "tags"] {
            let mut keys = Document::new();
            keys.insert(field, 1);
            items
                .create_index(index(keys, false))
                .await
                .map_err(map_mongo_error)?;
        }

        info!(database = %self.database.name(), "MongoDB indexes ready");
        Ok(())
    }

    /// Drops the whole database, both collections and their indexes.
    pub async fn drop_database(&self) -> StorageResult<()> {
        self.database.drop().await.map_err(map_mongo_error)?;
        debug!(database = %self.database.name(), "MongoDB database dropped");
        Ok(())
    }
}

fn index(keys: Document, unique: bool) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(unique).build())
        .build()
}

/// Returns true for a unique index violation.
pub(super) fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(w)) if w.code == DUPLICATE_KEY
    )
}

/// Classifies a driver error as unavailability or a failed query.
pub(super) fn map_mongo_error(err: MongoError) -> StorageError {
    debug!(error = %err, "MongoDB operation failed");
    let unreachable = matches!(
        err.kind.as_ref(),
        ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
    );
    if unreachable {
        StorageError::Backend(BackendError::Unavailable {
            backend_name: BACKEND_NAME.to_string(),
            message: err.to_string(),
        })
    } else {
        StorageError::Backend(BackendError::QueryError {
            message: err.to_string(),
        })
    }
}

/// Maps a BSON encoding failure.
pub(super) fn map_bson_error(err: impl std::fmt::Display) -> StorageError {
    StorageError::Backend(BackendError::SerializationError {
        message: err.to_string(),
    })
}

#[async_trait]
impl Backend for MongoBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::MongoDB
    }

    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn health_check(&self) -> StorageResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Health check failed: {}", e),
            })?;
        Ok(())
    }
}
