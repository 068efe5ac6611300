//! Collection statistics handlers.

use axum::{Json, extract::State};
use logos_persistence::core::{ArticleStorage, ItemStorage};
use logos_persistence::types::{ArticleStats, ItemStats};

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for `GET [base]/stats/articles`.
///
/// The total is derived from the per-theme counts of one aggregation, so it
/// always equals their sum.
pub async fn article_stats_handler<S>(
    State(state): State<AppState<S>>,
) -> RestResult<Json<ArticleStats>>
where
    S: ArticleStorage,
{
    let counts = state.storage().theme_counts().await?;
    Ok(Json(ArticleStats::from_theme_counts(counts)))
}

/// Handler for `GET [base]/stats/items`.
pub async fn item_stats_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<ItemStats>>
where
    S: ItemStorage,
{
    Ok(Json(state.storage().item_stats().await?))
}
