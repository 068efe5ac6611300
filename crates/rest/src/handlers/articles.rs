//! Article endpoint handlers.
//!
//! - `GET [base]/articles/` - paged listing with optional theme and text filters
//! - `GET [base]/articles/{id}` - one article
//! - `GET [base]/articles/search` - text search
//! - `GET [base]/articles/themes/` - distinct themes
//! - `POST [base]/articles/upload` - load the configured dataset file

use axum::{
    Json,
    extract::{Path, State},
};
use logos_persistence::core::ArticleStorage;
use logos_persistence::search::{self, ArticleFilter, SearchRequest};
use logos_persistence::types::{Article, ArticleSummary, PageBounds};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dataset::{self, UploadReport};
use crate::error::{RestError, RestResult};
use crate::extractors::{Pagination, ValidQuery, parse_integer};
use crate::state::AppState;

/// Filters accepted by the article listing.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    /// Exact theme.
    pub theme: Option<String>,
    /// Case-insensitive text across titles and content.
    pub search: Option<String>,
}

/// Body of the article listing.
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    /// Summaries of the articles in the window.
    pub articles: Vec<ArticleSummary>,
    /// Matching articles before skip/limit.
    pub total: u64,
    /// Applied skip.
    pub skip: u64,
    /// Applied limit.
    pub limit: u64,
    /// More articles follow.
    pub has_next: bool,
    /// Articles precede.
    pub has_previous: bool,
}

/// Parameters of the search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// The search term.
    pub q: Option<String>,
    /// Restrict matching to one language.
    pub language: Option<String>,
    /// Maximum number of results.
    pub limit: Option<String>,
}

/// Body of the search endpoint.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Matching articles, at most `limit`.
    pub articles: Vec<ArticleSummary>,
    /// Matching articles before truncation.
    pub total_matches: u64,
}

/// Handler for the article listing.
///
/// # HTTP Request
///
/// `GET [base]/articles/?skip=&limit=&theme=&search=`
///
/// # Response
///
/// - `200 OK` - One page of article summaries
/// - `400 Bad Request` - Non-integer `skip` or `limit`, or a `search` term
///   longer than 100 characters
pub async fn list_articles_handler<S>(
    State(state): State<AppState<S>>,
    pagination: Pagination,
    ValidQuery(params): ValidQuery<ArticleListParams>,
) -> RestResult<Json<ArticleListResponse>>
where
    S: ArticleStorage,
{
    let page = pagination.page(PageBounds::ARTICLES);
    let filter = ArticleFilter::new()
        .with_theme(params.theme.as_deref())
        .with_search(params.search.as_deref(), None);

    debug!(
        skip = page.skip(),
        limit = page.limit(),
        theme = ?filter.theme,
        "Processing article list request"
    );

    let page = search::list_articles(state.storage(), &filter, page).await?;

    Ok(Json(ArticleListResponse {
        articles: page.items.iter().map(Article::summary).collect(),
        total: page.total,
        skip: page.skip,
        limit: page.limit,
        has_next: page.has_next,
        has_previous: page.has_previous,
    }))
}

/// Handler for reading one article.
///
/// # HTTP Request
///
/// `GET [base]/articles/{id}`
///
/// # Response
///
/// - `200 OK` - The full article
/// - `404 Not Found` - No article has this id
pub async fn get_article_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<Article>>
where
    S: ArticleStorage,
{
    debug!(id = %id, "Processing article read request");

    state
        .storage()
        .read_article(&id)
        .await?
        .map(Json)
        .ok_or(RestError::NotFound {
            resource: "article".to_string(),
            id,
        })
}

/// Handler for article search.
///
/// Matches `q` case-insensitively against titles and content blocks, in
/// every language or only in `language`. Results keep insertion order.
///
/// # HTTP Request
///
/// `GET [base]/articles/search?q=&language=&limit=`
///
/// # Response
///
/// - `200 OK` - Matching summaries and the total match count
/// - `400 Bad Request` - Missing or overlong `q`, unknown `language`, or a
///   non-integer `limit`
pub async fn search_articles_handler<S>(
    State(state): State<AppState<S>>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> RestResult<Json<SearchResponse>>
where
    S: ArticleStorage,
{
    let request = SearchRequest::parse(
        params.q.as_deref(),
        params.language.as_deref(),
        parse_integer("limit", params.limit.as_deref())?,
    )?;

    debug!(q = ?params.q, language = ?params.language, "Processing article search");

    let outcome = search::search_articles(state.storage(), &request).await?;

    Ok(Json(SearchResponse {
        articles: outcome.articles.iter().map(Article::summary).collect(),
        total_matches: outcome.total_matches,
    }))
}

/// Handler for the theme listing. Themes are sorted ascending.
pub async fn themes_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<Vec<String>>>
where
    S: ArticleStorage,
{
    Ok(Json(state.storage().distinct_themes().await?))
}

/// Handler for the dataset upload.
///
/// Reads the configured dataset file and inserts the pages whose ids are
/// not stored yet. Running it again inserts nothing.
///
/// # HTTP Request
///
/// `POST [base]/articles/upload`
///
/// # Response
///
/// - `200 OK` - Upload report
/// - `400 Bad Request` - Malformed dataset or no pages
/// - `404 Not Found` - Dataset file missing
pub async fn upload_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<UploadReport>>
where
    S: ArticleStorage,
{
    let path = state.dataset_path();
    info!(path = %path.display(), "Uploading articles from dataset");

    let pages = dataset::load_dataset(path).await?;
    let report = dataset::upload_pages(state.storage(), pages).await?;

    Ok(Json(report))
}
