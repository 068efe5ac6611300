//! Paged listing and article search on top of the storage traits.

use tracing::debug;

use super::filter::{ArticleFilter, ItemFilter, check_search_length, non_empty};
use crate::core::{ArticleStorage, ItemStorage};
use crate::error::{StorageResult, ValidationError};
use crate::types::{Article, Item, Language, Page, PageBounds, PageRequest};

/// Lists one page of articles matching `filter`.
///
/// The total is counted first; a window starting past the total is answered
/// without a second store call.
pub async fn list_articles<S>(
    storage: &S,
    filter: &ArticleFilter,
    page: PageRequest,
) -> StorageResult<Page<Article>>
where
    S: ArticleStorage + ?Sized,
{
    filter.validate()?;
    let total = storage.count_articles(filter).await?;
    let articles = if page.skip() >= total {
        Vec::new()
    } else {
        storage
            .find_articles(filter, page.skip(), page.limit())
            .await?
    };

    debug!(
        total,
        skip = page.skip(),
        limit = page.limit(),
        returned = articles.len(),
        "Listed articles"
    );

    Ok(Page::new(articles, total, page))
}

/// Lists one page of items matching `filter`.
pub async fn list_items<S>(
    storage: &S,
    filter: &ItemFilter,
    page: PageRequest,
) -> StorageResult<Page<Item>>
where
    S: ItemStorage + ?Sized,
{
    filter.validate()?;
    let total = storage.count_items(filter).await?;
    let items = if page.skip() >= total {
        Vec::new()
    } else {
        storage.find_items(filter, page.skip(), page.limit()).await?
    };
    Ok(Page::new(items, total, page))
}

/// A validated article search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    filter: ArticleFilter,
    limit: u64,
}

impl SearchRequest {
    /// Validates raw search parameters.
    ///
    /// `q` must be present, non-empty and at most 100 characters.
    /// `language`, when non-empty, must name a known language. `limit` is
    /// clamped like a listing limit.
    pub fn parse(
        q: Option<&str>,
        language: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let term = non_empty(q).ok_or_else(|| ValidationError::MissingRequiredField {
            field: "q".to_string(),
        })?;
        check_search_length("q", term)?;
        let language = non_empty(language)
            .map(str::parse::<Language>)
            .transpose()?;

        Ok(Self {
            filter: ArticleFilter::new().with_search(Some(term), language),
            limit: PageBounds::ARTICLES.clamp_limit(limit),
        })
    }

    /// The filter the search evaluates.
    pub fn filter(&self) -> &ArticleFilter {
        &self.filter
    }

    /// Maximum number of articles returned.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

/// Result of an article search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Matching articles in insertion order, at most the request limit.
    pub articles: Vec<Article>,
    /// Number of matching articles before truncation.
    pub total_matches: u64,
}

/// Runs an article search.
pub async fn search_articles<S>(storage: &S, request: &SearchRequest) -> StorageResult<SearchOutcome>
where
    S: ArticleStorage + ?Sized,
{
    let total_matches = storage.count_articles(request.filter()).await?;
    let articles = if total_matches == 0 {
        Vec::new()
    } else {
        storage
            .find_articles(request.filter(), 0, request.limit())
            .await?
    };

    debug!(total_matches, returned = articles.len(), "Searched articles");

    Ok(SearchOutcome {
        articles,
        total_matches,
    })
}
