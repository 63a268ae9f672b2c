//! Domain layer: menu and identity aggregates with their repository interfaces.

pub mod item;
pub mod repositories;
pub mod section;
pub mod user;

pub use item::{Item, ItemDraft, ItemRepository};
pub use repositories::RepositoryProvider;
pub use section::{Section, SectionDraft, SectionRepository};
pub use user::{Principal, User, UserDraft, UserLookup, UserRepository, UserRole};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::{DomainError, DomainResult};
