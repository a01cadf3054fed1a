//! Item handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::{Item, ItemId, ItemSearch, ItemUpdate};

use crate::api::extractors::{PathParam, QueryParams, ValidatedJson};
use crate::api::state::AppState;

/// Item creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    /// Display name
    #[validate(length(min = 1, message = "Item name cannot be empty"))]
    #[schema(example = "book")]
    pub item_name: String,
    /// Unit price
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 10000)]
    pub price: Option<i32>,
    /// Units in stock
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    #[schema(example = 10)]
    pub quantity: Option<i32>,
}

impl From<CreateItemRequest> for Item {
    fn from(req: CreateItemRequest) -> Self {
        Item::new(req.item_name, req.price, req.quantity)
    }
}

/// Item update request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    /// New display name
    #[validate(length(min = 1, message = "Item name cannot be empty"))]
    #[schema(example = "notebook")]
    pub item_name: String,
    /// New unit price
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: Option<i32>,
    /// New stock quantity
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,
}

impl From<UpdateItemRequest> for ItemUpdate {
    fn from(req: UpdateItemRequest) -> Self {
        ItemUpdate {
            item_name: req.item_name,
            price: req.price,
            quantity: req.quantity,
        }
    }
}

/// Item list filters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ItemSearchParams {
    /// Only items whose name contains this text
    pub item_name: Option<String>,
    /// Only items priced at or below this value
    pub max_price: Option<i32>,
}

impl From<ItemSearchParams> for ItemSearch {
    fn from(params: ItemSearchParams) -> Self {
        ItemSearch::new(params.item_name, params.max_price)
    }
}

/// Create item routes
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

/// List items, optionally filtered
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    params(ItemSearchParams),
    responses(
        (status = 200, description = "Matching items ordered by ID", body = Vec<Item>),
        (status = 400, description = "Malformed query parameters")
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ItemSearchParams>,
) -> AppResult<Json<Vec<Item>>> {
    let search = ItemSearch::from(params);
    let items = state.item_service.find_items(&search).await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateItemRequest>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = state.item_service.save(Item::from(payload)).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Malformed item ID"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    PathParam(id): PathParam<ItemId>,
) -> AppResult<Json<Item>> {
    let item = state.item_service.find_by_id(id).await?.ok_or_not_found()?;
    Ok(Json(item))
}

/// Replace an item's fields
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    PathParam(id): PathParam<ItemId>,
    ValidatedJson(payload): ValidatedJson<UpdateItemRequest>,
) -> AppResult<Json<Item>> {
    let item = state
        .item_service
        .update(id, ItemUpdate::from(payload))
        .await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    PathParam(id): PathParam<ItemId>,
) -> AppResult<StatusCode> {
    state.item_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
