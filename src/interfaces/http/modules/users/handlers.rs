//! User management API handlers
//!
//! Admin-only endpoints. Delegates to `UserService` from the
//! application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use tracing::info;
use uuid::Uuid;

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto, UserSearchParams};
use crate::application::UserService;
use crate::domain::Principal;
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 400, description = "Unknown user"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state.user_service.view(&id).await.map_err(ApiError::single)?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(UserSearchParams),
    responses(
        (status = 200, description = "Matching user", body = ApiResponse<UserDto>),
        (status = 400, description = "No match or ambiguous query"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn search_users(
    State(state): State<UserHandlerState>,
    Query(params): Query<UserSearchParams>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let lookup = params.into_lookup().ok_or_else(|| {
        ApiError::bad_request("Provide either email, or first_name and last_name")
    })?;
    let user = state
        .user_service
        .search(&lookup)
        .await
        .map_err(ApiError::single)?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid body, weak password or email taken"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state
        .user_service
        .create_user(request.into())
        .await
        .map_err(ApiError::single)?;
    info!(user_id = %user.id, by = %principal.email, "Account created by admin");
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID (UUID)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Malformed id, invalid body or unknown user"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::bad_request(format!("Invalid user id '{}'", id)))?;
    let user = state
        .user_service
        .update_user(id, request.into())
        .await
        .map_err(ApiError::single)?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<String>),
        (status = 400, description = "Unknown user"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .user_service
        .delete_user(&id)
        .await
        .map_err(ApiError::single)?;
    Ok(Json(ApiResponse::message("User deleted")))
}
