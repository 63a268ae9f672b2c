//! Menu service: section and item use-cases.
//!
//! Handlers stay thin and delegate here. Identifiers arriving as raw path
//! segments are parsed by the service, so an unparseable id reads the same
//! as an unknown one.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, Item, ItemDraft, Principal, RepositoryProvider, Section,
    SectionDraft,
};

/// A section together with the items it owns.
#[derive(Debug, Clone)]
pub struct SectionDetail {
    pub section: Section,
    pub items: Vec<Item>,
}

pub struct MenuService {
    repos: Arc<dyn RepositoryProvider>,
}

impl MenuService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Sections ────────────────────────────────────────────────

    pub async fn sections(&self) -> DomainResult<Vec<Section>> {
        self.repos.sections().find_all().await
    }

    pub async fn section_by_id(&self, raw_id: &str) -> DomainResult<SectionDetail> {
        let section = self.load_section(raw_id).await?;
        let items = self.repos.items().find_by_section(section.id).await?;
        Ok(SectionDetail { section, items })
    }

    pub async fn new_section(
        &self,
        draft: SectionDraft,
        actor: &Principal,
    ) -> DomainResult<Section> {
        let section = self
            .repos
            .sections()
            .create(Section::from_draft(draft, Utc::now()))
            .await?;

        info!(section_id = %section.id, name = %section.name, by = %actor.email, "Section created");
        Ok(section)
    }

    pub async fn update_section_data(
        &self,
        id: Uuid,
        draft: SectionDraft,
        actor: &Principal,
    ) -> DomainResult<Section> {
        let mut section = self
            .repos
            .sections()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Section", "id", id))?;

        section.apply(draft, Utc::now());
        let section = self.repos.sections().update(section).await?;

        info!(section_id = %section.id, by = %actor.email, "Section updated");
        Ok(section)
    }

    /// Removes the section and every item it owns.
    pub async fn delete_section(&self, raw_id: &str, actor: &Principal) -> DomainResult<()> {
        let id = parse_id("Section", raw_id)?;
        self.repos.sections().delete(id).await?;

        info!(section_id = %id, by = %actor.email, "Section deleted");
        Ok(())
    }

    // ── Items ───────────────────────────────────────────────────

    pub async fn items(&self) -> DomainResult<Vec<Item>> {
        self.repos.items().find_all().await
    }

    pub async fn item_by_id(&self, raw_id: &str) -> DomainResult<Item> {
        let id = parse_id("Item", raw_id)?;
        self.repos
            .items()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item", "id", id))
    }

    pub async fn new_item(&self, draft: ItemDraft, actor: &Principal) -> DomainResult<Item> {
        self.ensure_section_exists(draft.section_id).await?;

        let item = self
            .repos
            .items()
            .create(Item::from_draft(draft, Utc::now()))
            .await?;

        info!(
            item_id = %item.id,
            section_id = %item.section_id,
            name = %item.name,
            by = %actor.email,
            "Item created"
        );
        Ok(item)
    }

    pub async fn update_item_data(
        &self,
        id: Uuid,
        draft: ItemDraft,
        actor: &Principal,
    ) -> DomainResult<Item> {
        let mut item = self
            .repos
            .items()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item", "id", id))?;

        if draft.section_id != item.section_id {
            self.ensure_section_exists(draft.section_id).await?;
        }

        item.apply(draft, Utc::now());
        let item = self.repos.items().update(item).await?;

        info!(item_id = %item.id, by = %actor.email, "Item updated");
        Ok(item)
    }

    pub async fn delete_item(&self, raw_id: &str, actor: &Principal) -> DomainResult<()> {
        let id = parse_id("Item", raw_id)?;
        self.repos.items().delete(id).await?;

        info!(item_id = %id, by = %actor.email, "Item deleted");
        Ok(())
    }

    async fn load_section(&self, raw_id: &str) -> DomainResult<Section> {
        let id = parse_id("Section", raw_id)?;
        self.repos
            .sections()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Section", "id", id))
    }

    async fn ensure_section_exists(&self, section_id: Uuid) -> DomainResult<()> {
        match self.repos.sections().find_by_id(section_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::Validation(format!(
                "Section '{}' does not exist",
                section_id
            ))),
        }
    }
}

/// An id that does not parse cannot name a stored row.
fn parse_id(entity: &'static str, raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DomainError::not_found(entity, "id", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    async fn service() -> MenuService {
        let repos = SeaOrmRepositoryProvider::new(test_database().await);
        MenuService::new(Arc::new(repos))
    }

    fn admin() -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            email: "admin@example.com".into(),
            role: UserRole::Admin,
        }
    }

    fn section_draft(name: &str) -> SectionDraft {
        SectionDraft {
            name: name.into(),
            description: None,
            position: 0,
        }
    }

    fn item_draft(section_id: Uuid, name: &str) -> ItemDraft {
        ItemDraft {
            section_id,
            name: name.into(),
            description: None,
            price: 899,
            available: true,
            position: 0,
        }
    }

    #[tokio::test]
    async fn section_detail_includes_its_items() {
        let svc = service().await;
        let section = svc.new_section(section_draft("Pasta"), &admin()).await.unwrap();
        svc.new_item(item_draft(section.id, "Carbonara"), &admin())
            .await
            .unwrap();

        let detail = svc.section_by_id(&section.id.to_string()).await.unwrap();
        assert_eq!(detail.section, section);
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.items[0].name, "Carbonara");
    }

    #[tokio::test]
    async fn malformed_id_reads_as_not_found() {
        let svc = service().await;
        let err = svc.section_by_id("not-a-uuid").await.unwrap_err();
        assert!(err.is_not_found());
        let err = svc.item_by_id("42").await.unwrap_err();
        assert!(err.is_not_found());
        let err = svc.delete_item("42", &admin()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn item_requires_existing_section() {
        let svc = service().await;
        let err = svc
            .new_item(item_draft(Uuid::new_v4(), "Orphan"), &admin())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn moving_item_to_missing_section_is_rejected() {
        let svc = service().await;
        let section = svc.new_section(section_draft("Salads"), &admin()).await.unwrap();
        let item = svc
            .new_item(item_draft(section.id, "Caesar"), &admin())
            .await
            .unwrap();

        let err = svc
            .update_item_data(item.id, item_draft(Uuid::new_v4(), "Caesar"), &admin())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn update_replaces_attributes_and_keeps_identity() {
        let svc = service().await;
        let section = svc.new_section(section_draft("Grill"), &admin()).await.unwrap();

        let updated = svc
            .update_section_data(
                section.id,
                SectionDraft {
                    name: "Charcoal grill".into(),
                    description: Some("Open flame".into()),
                    position: 9,
                },
                &admin(),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, section.id);
        assert_eq!(updated.created_at, section.created_at);
        assert_eq!(updated.name, "Charcoal grill");
        assert_eq!(updated.position, 9);
    }

    #[tokio::test]
    async fn item_update_replaces_fields() {
        let svc = service().await;
        let starters = svc.new_section(section_draft("Starters"), &admin()).await.unwrap();
        let mains = svc.new_section(section_draft("Mains"), &admin()).await.unwrap();
        let mut draft = item_draft(starters.id, "Bruschetta");
        draft.description = Some("Tomato, basil".into());
        let item = svc.new_item(draft, &admin()).await.unwrap();

        let updated = svc
            .update_item_data(
                item.id,
                ItemDraft {
                    section_id: mains.id,
                    name: "Bruschetta platter".into(),
                    description: None,
                    price: 1299,
                    available: false,
                    position: 4,
                },
                &admin(),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.created_at, item.created_at);
        assert_eq!(updated.section_id, mains.id);
        assert_eq!(updated.name, "Bruschetta platter");
        assert_eq!(updated.description, None);
        assert_eq!(updated.price, 1299);
        assert!(!updated.available);
        assert_eq!(updated.position, 4);

        let stored = svc.item_by_id(&item.id.to_string()).await.unwrap();
        assert_eq!(stored.name, "Bruschetta platter");
        assert_eq!(stored.section_id, mains.id);
        assert!(svc.section_by_id(&starters.id.to_string()).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn item_update_of_missing_item_is_not_found() {
        let svc = service().await;
        let section = svc.new_section(section_draft("Sides"), &admin()).await.unwrap();
        let err = svc
            .update_item_data(Uuid::new_v4(), item_draft(section.id, "Fries"), &admin())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn deleted_item_is_gone() {
        let svc = service().await;
        let section = svc.new_section(section_draft("Sweets"), &admin()).await.unwrap();
        let doomed = svc
            .new_item(item_draft(section.id, "Panna cotta"), &admin())
            .await
            .unwrap();
        let kept = svc
            .new_item(item_draft(section.id, "Gelato"), &admin())
            .await
            .unwrap();

        svc.delete_item(&doomed.id.to_string(), &admin()).await.unwrap();

        assert!(svc.item_by_id(&doomed.id.to_string()).await.unwrap_err().is_not_found());
        let remaining = svc.items().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
        let err = svc.delete_item(&doomed.id.to_string(), &admin()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn deleting_section_removes_items() {
        let svc = service().await;
        let section = svc.new_section(section_draft("Brunch"), &admin()).await.unwrap();
        let item = svc
            .new_item(item_draft(section.id, "Pancakes"), &admin())
            .await
            .unwrap();

        svc.delete_section(&section.id.to_string(), &admin())
            .await
            .unwrap();

        assert!(svc.item_by_id(&item.id.to_string()).await.unwrap_err().is_not_found());
        assert!(svc.items().await.unwrap().is_empty());
    }
}
