//! Item domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single menu entry, always owned by one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub section_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Price in the smallest currency unit (e.g. cents)
    pub price: i64,
    pub available: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied item attributes, used for both create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub section_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub available: bool,
    pub position: i32,
}

impl Item {
    pub fn from_draft(draft: ItemDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            section_id: draft.section_id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            available: draft.available,
            position: draft.position,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: ItemDraft, now: DateTime<Utc>) {
        self.section_id = draft.section_id;
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.available = draft.available;
        self.position = draft.position;
        self.updated_at = now;
    }
}
