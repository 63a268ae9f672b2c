//! Aggregate repository access

use super::item::ItemRepository;
use super::section::SectionRepository;
use super::user::UserRepository;

/// One accessor per aggregate, backed by a single connection pool.
pub trait RepositoryProvider: Send + Sync {
    fn sections(&self) -> &dyn SectionRepository;
    fn items(&self) -> &dyn ItemRepository;
    fn users(&self) -> &dyn UserRepository;
}
