use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::{db_err, is_unique_violation, parse_stored_id};
use crate::domain::{DomainError, DomainResult, User, UserLookup, UserRepository, UserRole};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Member => UserRole::Member,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Member => user::UserRole::Member,
    }
}

fn user_model_to_domain(model: user::Model) -> DomainResult<User> {
    Ok(User {
        id: parse_stored_id(&model.id)?,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn domain_to_active(u: &User) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(u.id.to_string()),
        email: Set(u.email.clone()),
        first_name: Set(u.first_name.clone()),
        last_name: Set(u.last_name.clone()),
        password_hash: Set(u.password_hash.clone()),
        role: Set(domain_role_to_entity(u.role)),
        created_at: Set(u.created_at),
        updated_at: Set(u.updated_at),
    }
}

fn write_err(e: DbErr, user: &User) -> DomainError {
    match e {
        DbErr::RecordNotUpdated => DomainError::not_found("User", "id", user.id.to_string()),
        e if is_unique_violation(&e) => {
            DomainError::Conflict(format!("Email '{}' is already registered", user.email))
        }
        other => db_err(other),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn view(&self, id: Uuid) -> DomainResult<User> {
        let model = user::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("User", "id", id.to_string()))?;

        user_model_to_domain(model)
    }

    async fn search(&self, lookup: &UserLookup) -> DomainResult<User> {
        let query = match lookup {
            UserLookup::Id(id) => user::Entity::find_by_id(id.to_string()),
            UserLookup::Email(email) => {
                user::Entity::find().filter(user::Column::Email.eq(email.as_str()))
            }
            UserLookup::Name { first, last } => user::Entity::find()
                .filter(user::Column::FirstName.eq(first.as_str()))
                .filter(user::Column::LastName.eq(last.as_str())),
        };

        // Name pairs are not unique; oldest account wins.
        let model = query
            .order_by_asc(user::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("User", lookup.field(), lookup.value()))?;

        user_model_to_domain(model)
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn count_admins(&self) -> DomainResult<u64> {
        user::Entity::find()
            .filter(user::Column::Role.eq(user::UserRole::Admin))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let model = domain_to_active(&user)
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, &user))?;
        user_model_to_domain(model)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let model = domain_to_active(&user)
            .update(&self.db)
            .await
            .map_err(|e| write_err(e, &user))?;
        user_model_to_domain(model)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("User", "id", id.to_string()));
        }

        Ok(())
    }
}
