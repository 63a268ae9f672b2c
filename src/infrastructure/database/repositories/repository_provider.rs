//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{ItemRepository, RepositoryProvider, SectionRepository, UserRepository};

use super::item_repository::SeaOrmItemRepository;
use super::section_repository::SeaOrmSectionRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let sections = repos.sections().find_all().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    sections: SeaOrmSectionRepository,
    items: SeaOrmItemRepository,
    users: SeaOrmUserRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            sections: SeaOrmSectionRepository::new(db.clone()),
            items: SeaOrmItemRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn sections(&self) -> &dyn SectionRepository {
        &self.sections
    }

    fn items(&self) -> &dyn ItemRepository {
        &self.items
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }
}
