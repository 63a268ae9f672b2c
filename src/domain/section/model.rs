//! Section domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A named grouping of menu items (e.g. "Appetizers").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Ordering key among sections, ascending
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied section attributes, used for both create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDraft {
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
}

impl Section {
    pub fn from_draft(draft: SectionDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            position: draft.position,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every client-owned attribute, keeping identity and creation time.
    pub fn apply(&mut self, draft: SectionDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.description = draft.description;
        self.position = draft.position;
        self.updated_at = now;
    }
}
