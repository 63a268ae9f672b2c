use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::{db_err, parse_stored_id};
use crate::domain::{DomainError, DomainResult, Item, ItemRepository};
use crate::infrastructure::database::entities::item;

pub struct SeaOrmItemRepository {
    db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: item::Model) -> DomainResult<Item> {
    Ok(Item {
        id: parse_stored_id(&model.id)?,
        section_id: parse_stored_id(&model.section_id)?,
        name: model.name,
        description: model.description,
        price: model.price,
        available: model.available,
        position: model.position,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn domain_to_active(i: &Item) -> item::ActiveModel {
    item::ActiveModel {
        id: Set(i.id.to_string()),
        section_id: Set(i.section_id.to_string()),
        name: Set(i.name.clone()),
        description: Set(i.description.clone()),
        price: Set(i.price),
        available: Set(i.available),
        position: Set(i.position),
        created_at: Set(i.created_at),
        updated_at: Set(i.updated_at),
    }
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn find_all(&self) -> DomainResult<Vec<Item>> {
        item::Entity::find()
            .order_by_asc(item::Column::Position)
            .order_by_asc(item::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Item>> {
        item::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_by_section(&self, section_id: Uuid) -> DomainResult<Vec<Item>> {
        item::Entity::find()
            .filter(item::Column::SectionId.eq(section_id.to_string()))
            .order_by_asc(item::Column::Position)
            .order_by_asc(item::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn create(&self, item: Item) -> DomainResult<Item> {
        let model = domain_to_active(&item)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        model_to_domain(model)
    }

    async fn update(&self, item: Item) -> DomainResult<Item> {
        let model = domain_to_active(&item)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => {
                    DomainError::not_found("Item", "id", item.id.to_string())
                }
                other => db_err(other),
            })?;
        model_to_domain(model)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = item::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Item", "id", id.to_string()));
        }

        Ok(())
    }
}
