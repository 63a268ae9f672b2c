//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod item_repository;
pub mod repository_provider;
pub mod section_repository;
pub mod user_repository;

pub use item_repository::SeaOrmItemRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use section_repository::SeaOrmSectionRepository;
pub use user_repository::SeaOrmUserRepository;

use tracing::error;
use uuid::Uuid;

use crate::domain::DomainError;

/// Log a store failure and convert it. The raw text stays in `Storage`
/// and is never rendered to clients.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    error!(error = %e, "Database error");
    DomainError::Storage(e.to_string())
}

pub(crate) fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("duplicate")
}

pub(crate) fn parse_stored_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| {
        error!(id = raw, error = %e, "Stored identifier is not a UUID");
        DomainError::Storage(format!("invalid stored id '{}': {}", raw, e))
    })
}
