//! User management DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{User, UserDraft, UserLookup, UserRole};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    Admin,
    #[default]
    Member,
}

impl From<RoleDto> for UserRole {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::Admin => UserRole::Admin,
            RoleDto::Member => UserRole::Member,
        }
    }
}

impl From<UserRole> for RoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => RoleDto::Admin,
            UserRole::Member => RoleDto::Member,
        }
    }
}

/// User as exposed over the API. The password hash never leaves the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: RoleDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            role: u.role.into(),
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: String,
    #[serde(default)]
    pub role: RoleDto,
    /// Checked against the password policy by the service
    #[validate(length(max = 128, message = "password must be at most 128 characters"))]
    pub password: String,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            role: req.role.into(),
            password: Some(req.password),
        }
    }
}

/// Full replacement of profile fields; `password` is optional.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: String,
    #[serde(default)]
    pub role: RoleDto,
    #[validate(length(max = 128, message = "password must be at most 128 characters"))]
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UserDraft {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            role: req.role.into(),
            password: req.password,
        }
    }
}

/// Search by `email`, or by `first_name` together with `last_name`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserSearchParams {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserSearchParams {
    /// The lookup key these parameters select, if they name exactly one.
    pub fn into_lookup(self) -> Option<UserLookup> {
        match (self.email, self.first_name, self.last_name) {
            (Some(email), None, None) => Some(UserLookup::Email(email)),
            (None, Some(first), Some(last)) => Some(UserLookup::Name { first, last }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_select_one_key() {
        let by_email = UserSearchParams {
            email: Some("a@b.c".into()),
            ..Default::default()
        };
        assert_eq!(by_email.into_lookup(), Some(UserLookup::Email("a@b.c".into())));

        let by_name = UserSearchParams {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            ..Default::default()
        };
        assert!(matches!(by_name.into_lookup(), Some(UserLookup::Name { .. })));

        let first_only = UserSearchParams {
            first_name: Some("Ada".into()),
            ..Default::default()
        };
        assert_eq!(first_only.into_lookup(), None);

        let mixed = UserSearchParams {
            email: Some("a@b.c".into()),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
        };
        assert_eq!(mixed.into_lookup(), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RoleDto::Admin).unwrap(), "\"admin\"");
        let parsed: RoleDto = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(UserRole::from(parsed), UserRole::Member);
    }
}
