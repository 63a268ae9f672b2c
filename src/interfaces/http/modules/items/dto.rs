//! Item DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Item, ItemDraft};

fn default_available() -> bool {
    true
}

/// Body of POST and PATCH. PATCH replaces every field.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ItemRequest {
    pub section_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    /// Minor currency units (cents)
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub position: i32,
}

impl From<ItemRequest> for ItemDraft {
    fn from(req: ItemRequest) -> Self {
        Self {
            section_id: req.section_id,
            name: req.name,
            description: req.description,
            price: req.price,
            available: req.available,
            position: req.position,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: Uuid,
    pub section_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub available: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemDto {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            section_id: i.section_id,
            name: i.name,
            description: i.description,
            price: i.price,
            available: i.available,
            position: i.position,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}
