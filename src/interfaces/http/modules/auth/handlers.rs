//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{LoginRequest, LoginResponse};
use crate::application::UserService;
use crate::domain::Principal;
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::users::UserDto;

#[derive(Clone)]
pub struct AuthHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let auth = state
        .user_service
        .login(&request.email, &request.password)
        .await
        .map_err(|e| ApiError::from_domain(e, StatusCode::UNAUTHORIZED))?;
    Ok(Json(ApiResponse::success(auth.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = ApiResponse<UserDto>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state
        .user_service
        .view(&principal.user_id.to_string())
        .await
        .map_err(|e| ApiError::from_domain(e, StatusCode::UNAUTHORIZED))?;
    Ok(Json(ApiResponse::success(user.into())))
}
