use async_trait::async_trait;
use uuid::Uuid;

use super::model::Item;
use crate::domain::DomainResult;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items ordered by position, then name.
    async fn find_all(&self) -> DomainResult<Vec<Item>>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Item>>;
    async fn find_by_section(&self, section_id: Uuid) -> DomainResult<Vec<Item>>;
    async fn create(&self, item: Item) -> DomainResult<Item>;
    /// Full replace. `NotFound` if the row does not exist.
    async fn update(&self, item: Item) -> DomainResult<Item>;
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
