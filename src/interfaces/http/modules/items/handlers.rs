//! Item API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use super::dto::{ItemDto, ItemRequest};
use crate::application::MenuService;
use crate::domain::Principal;
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};

#[derive(Clone)]
pub struct ItemHandlerState {
    pub menu: Arc<MenuService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/items",
    tag = "Items",
    responses(
        (status = 200, description = "All items", body = ApiResponse<Vec<ItemDto>>),
        (status = 500, description = "Listing failed")
    )
)]
pub async fn list_items(
    State(state): State<ItemHandlerState>,
) -> Result<Json<ApiResponse<Vec<ItemDto>>>, ApiError> {
    let items = state.menu.items().await.map_err(ApiError::list)?;
    Ok(Json(ApiResponse::success(
        items.into_iter().map(ItemDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{id}",
    tag = "Items",
    params(("id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item", body = ApiResponse<ItemDto>),
        (status = 400, description = "Unknown item")
    )
)]
pub async fn get_item(
    State(state): State<ItemHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    let item = state.menu.item_by_id(&id).await.map_err(ApiError::single)?;
    Ok(Json(ApiResponse::success(item.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/items",
    tag = "Items",
    security(("bearer_auth" = [])),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item created", body = ApiResponse<ItemDto>),
        (status = 400, description = "Invalid body or unknown section"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn create_item(
    State(state): State<ItemHandlerState>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(request): ValidatedJson<ItemRequest>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    let item = state
        .menu
        .new_item(request.into(), &principal)
        .await
        .map_err(ApiError::single)?;
    Ok(Json(ApiResponse::success(item.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/items/{id}",
    tag = "Items",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Item ID (UUID)")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item replaced", body = ApiResponse<ItemDto>),
        (status = 400, description = "Malformed id, invalid body, unknown item or section"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn update_item(
    State(state): State<ItemHandlerState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ItemRequest>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::bad_request(format!("Invalid item id '{}'", id)))?;

    let item = state
        .menu
        .update_item_data(id, request.into(), &principal)
        .await
        .map_err(ApiError::single)?;
    Ok(Json(ApiResponse::success(item.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/items/{id}",
    tag = "Items",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item deleted", body = ApiResponse<String>),
        (status = 400, description = "Unknown item"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn delete_item(
    State(state): State<ItemHandlerState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .menu
        .delete_item(&id, &principal)
        .await
        .map_err(ApiError::single)?;
    Ok(Json(ApiResponse::message("Item deleted")))
}
