use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use super::{db_err, parse_stored_id};
use crate::domain::{DomainError, DomainResult, Section, SectionRepository};
use crate::infrastructure::database::entities::{item, section};

pub struct SeaOrmSectionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSectionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(model: section::Model) -> DomainResult<Section> {
    Ok(Section {
        id: parse_stored_id(&model.id)?,
        name: model.name,
        description: model.description,
        position: model.position,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn domain_to_active(s: &Section) -> section::ActiveModel {
    section::ActiveModel {
        id: Set(s.id.to_string()),
        name: Set(s.name.clone()),
        description: Set(s.description.clone()),
        position: Set(s.position),
        created_at: Set(s.created_at),
        updated_at: Set(s.updated_at),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl SectionRepository for SeaOrmSectionRepository {
    async fn find_all(&self) -> DomainResult<Vec<Section>> {
        section::Entity::find()
            .order_by_asc(section::Column::Position)
            .order_by_asc(section::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Section>> {
        section::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn create(&self, section: Section) -> DomainResult<Section> {
        let model = domain_to_active(&section)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        model_to_domain(model)
    }

    async fn update(&self, section: Section) -> DomainResult<Section> {
        let model = domain_to_active(&section)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => {
                    DomainError::not_found("Section", "id", section.id.to_string())
                }
                other => db_err(other),
            })?;
        model_to_domain(model)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let key = id.to_string();
        let txn = self.db.begin().await.map_err(db_err)?;

        let items = item::Entity::delete_many()
            .filter(item::Column::SectionId.eq(key.clone()))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let result = section::Entity::delete_by_id(key.clone())
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::not_found("Section", "id", key));
        }

        txn.commit().await.map_err(db_err)?;
        debug!(section_id = %id, items_removed = items.rows_affected, "Cascade delete committed");
        Ok(())
    }
}
