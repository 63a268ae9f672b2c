//! Section API handlers
//!
//! Reads are public. Writes sit behind the admin gate, which supplies the
//! acting principal.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use super::dto::{SectionDetailDto, SectionDto, SectionRequest};
use crate::application::MenuService;
use crate::domain::Principal;
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};

#[derive(Clone)]
pub struct SectionHandlerState {
    pub menu: Arc<MenuService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/sections",
    tag = "Sections",
    responses(
        (status = 200, description = "All sections", body = ApiResponse<Vec<SectionDto>>),
        (status = 500, description = "Listing failed")
    )
)]
pub async fn list_sections(
    State(state): State<SectionHandlerState>,
) -> Result<Json<ApiResponse<Vec<SectionDto>>>, ApiError> {
    let sections = state.menu.sections().await.map_err(ApiError::list)?;
    Ok(Json(ApiResponse::success(
        sections.into_iter().map(SectionDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    params(("id" = String, Path, description = "Section ID")),
    responses(
        (status = 200, description = "Section with its items", body = ApiResponse<SectionDetailDto>),
        (status = 400, description = "Unknown section")
    )
)]
pub async fn get_section(
    State(state): State<SectionHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SectionDetailDto>>, ApiError> {
    let detail = state.menu.section_by_id(&id).await.map_err(ApiError::single)?;
    Ok(Json(ApiResponse::success(detail.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/sections",
    tag = "Sections",
    security(("bearer_auth" = [])),
    request_body = SectionRequest,
    responses(
        (status = 200, description = "Section created", body = ApiResponse<SectionDto>),
        (status = 400, description = "Invalid body"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn create_section(
    State(state): State<SectionHandlerState>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(request): ValidatedJson<SectionRequest>,
) -> Result<Json<ApiResponse<SectionDto>>, ApiError> {
    let section = state
        .menu
        .new_section(request.into(), &principal)
        .await
        .map_err(ApiError::single)?;
    Ok(Json(ApiResponse::success(section.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Section ID (UUID)")),
    request_body = SectionRequest,
    responses(
        (status = 200, description = "Section replaced", body = ApiResponse<SectionDto>),
        (status = 400, description = "Malformed id, invalid body or unknown section"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn update_section(
    State(state): State<SectionHandlerState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<SectionRequest>,
) -> Result<Json<ApiResponse<SectionDto>>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::bad_request(format!("Invalid section id '{}'", id)))?;

    let section = state
        .menu
        .update_section_data(id, request.into(), &principal)
        .await
        .map_err(ApiError::single)?;
    Ok(Json(ApiResponse::success(section.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Section ID")),
    responses(
        (status = 200, description = "Section and its items deleted", body = ApiResponse<String>),
        (status = 400, description = "Unknown section"),
        (status = 401, description = "Not an admin")
    )
)]
pub async fn delete_section(
    State(state): State<SectionHandlerState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .menu
        .delete_section(&id, &principal)
        .await
        .map_err(ApiError::single)?;
    Ok(Json(ApiResponse::message("Section deleted")))
}
