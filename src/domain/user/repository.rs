use async_trait::async_trait;
use uuid::Uuid;

use super::model::{User, UserLookup};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `NotFound` if no user has this id.
    async fn view(&self, id: Uuid) -> DomainResult<User>;
    /// First user matching the lookup key, `NotFound` otherwise.
    async fn search(&self, lookup: &UserLookup) -> DomainResult<User>;
    async fn count(&self) -> DomainResult<u64>;
    async fn count_admins(&self) -> DomainResult<u64>;
    /// `Conflict` if the email is already taken.
    async fn create(&self, user: User) -> DomainResult<User>;
    /// Full replace.
    async fn update(&self, user: User) -> DomainResult<User>;
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
