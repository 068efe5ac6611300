//! Memory backend state and health.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::{Backend, BackendKind};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::{Article, Item};

/// In-process store for articles and items.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    pub(super) articles: RwLock<Vec<Article>>,
    pub(super) items: RwLock<Vec<Item>>,
    offline: AtomicBool,
}

impl MemoryBackend {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with articles, kept in the given order.
    ///
    /// Later duplicates of an id are dropped.
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let backend = Self::new();
        {
            let mut stored = backend.articles.write();
            for article in articles {
                if !stored.iter().any(|a| a.id == article.id) {
                    stored.push(article);
                }
            }
        }
        backend
    }

    /// Simulates losing or regaining the store connection.
    ///
    /// While offline every operation fails with `BackendError::Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub(super) fn ensure_online(&self) -> StorageResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StorageError::Backend(BackendError::Unavailable {
                backend_name: "memory".to_string(),
                message: "store is offline".to_string(),
            }));
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> StorageResult<()> {
        self.ensure_online()
    }
}
