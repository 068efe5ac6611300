//! Item CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use logos_persistence::core::ItemStorage;
use logos_persistence::search::{self, ItemFilter, non_empty, parse_tags};
use logos_persistence::types::{Item, ItemCategory, ItemUpdate, NewItem, Page, PageBounds};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::error::{RestError, RestResult};
use crate::extractors::{Pagination, ValidJson, ValidQuery};
use crate::state::AppState;

/// Filters accepted by the item listing.
#[derive(Debug, Default, Deserialize)]
pub struct ItemListParams {
    /// Category name.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Active flag.
    pub is_active: Option<bool>,
    /// Substring of name or description.
    pub search: Option<String>,
    /// Comma-separated tags; any match.
    pub tags: Option<String>,
}

impl ItemListParams {
    fn into_filter(self) -> RestResult<ItemFilter> {
        let category = non_empty(self.category.as_deref())
            .map(str::parse::<ItemCategory>)
            .transpose()?;
        Ok(ItemFilter {
            category,
            min_price: self.min_price,
            max_price: self.max_price,
            is_active: self.is_active,
            search: non_empty(self.search.as_deref()).map(str::to_string),
            tags: parse_tags(self.tags.as_deref()),
        })
    }
}

fn item_not_found(id: String) -> RestError {
    RestError::NotFound {
        resource: "item".to_string(),
        id,
    }
}

/// Handler for item creation.
///
/// # Response
///
/// - `201 Created` - The stored item with its assigned id
/// - `400 Bad Request` - Field rule violated
pub async fn create_item_handler<S>(
    State(state): State<AppState<S>>,
    ValidJson(item): ValidJson<NewItem>,
) -> RestResult<(StatusCode, Json<Item>)>
where
    S: ItemStorage,
{
    item.validate()?;
    let created = state.storage().create_item(item).await?;
    info!(id = %created.id, "Created item");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for the item listing.
pub async fn list_items_handler<S>(
    State(state): State<AppState<S>>,
    pagination: Pagination,
    ValidQuery(params): ValidQuery<ItemListParams>,
) -> RestResult<Json<Page<Item>>>
where
    S: ItemStorage,
{
    let filter = params.into_filter()?;
    let page = pagination.page(PageBounds::ITEMS);
    debug!(skip = page.skip(), limit = page.limit(), "Processing item list request");
    Ok(Json(search::list_items(state.storage(), &filter, page).await?))
}

/// Handler for reading one item.
pub async fn get_item_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<Item>>
where
    S: ItemStorage,
{
    state
        .storage()
        .read_item(&id)
        .await?
        .map(Json)
        .ok_or_else(|| item_not_found(id))
}

/// Handler for partial item updates.
///
/// Only the fields present in the body change. An empty body is rejected.
pub async fn update_item_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    ValidJson(update): ValidJson<ItemUpdate>,
) -> RestResult<Json<Item>>
where
    S: ItemStorage,
{
    update.validate()?;
    let updated = state.storage().update_item(&id, update).await?;
    debug!(id = %updated.id, "Updated item");
    Ok(Json(updated))
}

/// Handler for item deletion.
pub async fn delete_item_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<Value>>
where
    S: ItemStorage,
{
    state.storage().delete_item(&id).await?;
    info!(id = %id, "Deleted item");
    Ok(Json(json!({ "message": "Item deleted successfully" })))
}
