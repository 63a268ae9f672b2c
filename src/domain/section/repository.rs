use async_trait::async_trait;
use uuid::Uuid;

use super::model::Section;
use crate::domain::DomainResult;

#[async_trait]
pub trait SectionRepository: Send + Sync {
    /// All sections ordered by position, then name.
    async fn find_all(&self) -> DomainResult<Vec<Section>>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Section>>;
    async fn create(&self, section: Section) -> DomainResult<Section>;
    /// Full replace. `NotFound` if the row does not exist.
    async fn update(&self, section: Section) -> DomainResult<Section>;
    /// Deletes the section together with every item it owns.
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
