//! Section DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::super::items::ItemDto;
use crate::application::SectionDetail;
use crate::domain::{Section, SectionDraft};

/// Body of POST and PATCH. PATCH replaces every field.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SectionRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    pub position: i32,
}

impl From<SectionRequest> for SectionDraft {
    fn from(req: SectionRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            position: req.position,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SectionDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Section> for SectionDto {
    fn from(s: Section) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            position: s.position,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// A section with the items it owns
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SectionDetailDto {
    #[serde(flatten)]
    pub section: SectionDto,
    pub items: Vec<ItemDto>,
}

impl From<SectionDetail> for SectionDetailDto {
    fn from(detail: SectionDetail) -> Self {
        Self {
            section: detail.section.into(),
            items: detail.items.into_iter().map(ItemDto::from).collect(),
        }
    }
}
