//! User service: application-layer orchestration for identity.
//!
//! All user-related business logic lives here. HTTP handlers are thin
//! wrappers that delegate to this service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, Principal, RepositoryProvider, User, UserDraft, UserLookup,
    UserRole,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::validate_password_strength;

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email + password and return a signed token.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let user = match self
            .repos
            .users()
            .search(&UserLookup::Email(email.to_string()))
            .await
        {
            Ok(user) => user,
            Err(e) if e.is_not_found() => {
                return Err(DomainError::Unauthorized("Invalid credentials".into()))
            }
            Err(e) => return Err(e),
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let token = create_token(
            &user.id.to_string(),
            &user.email,
            user.role.as_str(),
            &self.jwt_config,
        )
        .map_err(|e| {
            error!(error = %e, "Failed to sign token");
            DomainError::Storage(format!("Failed to create token: {}", e))
        })?;

        info!(user_id = %user.id, "User logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Fetch a user by a raw id; an id that does not parse is not found.
    pub async fn view(&self, raw_id: &str) -> DomainResult<User> {
        let id = Uuid::parse_str(raw_id)
            .map_err(|_| DomainError::not_found("User", "id", raw_id))?;
        self.repos.users().view(id).await
    }

    /// Caller identity as currently stored, ignoring whatever a token claims.
    pub async fn principal(&self, id: Uuid) -> DomainResult<Principal> {
        let user = self.repos.users().view(id).await?;
        Ok(Principal {
            user_id: user.id,
            email: user.email,
            role: user.role,
        })
    }

    pub async fn search(&self, lookup: &UserLookup) -> DomainResult<User> {
        self.repos.users().search(lookup).await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create an account. The password must satisfy the strength policy.
    pub async fn create_user(&self, draft: UserDraft) -> DomainResult<User> {
        let password = draft
            .password
            .as_deref()
            .ok_or_else(|| DomainError::Validation("Password is required".into()))?;
        validate_password_strength(password)?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            password_hash: hash(password)?,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            role: draft.role,
            created_at: now,
            updated_at: now,
        };

        let user = self.repos.users().create(user).await?;
        info!(user_id = %user.id, email = %user.email, role = %user.role, "User created");
        Ok(user)
    }

    /// Replace profile fields; the password is only changed when supplied.
    pub async fn update_user(&self, id: Uuid, draft: UserDraft) -> DomainResult<User> {
        let mut user = self.repos.users().view(id).await?;

        if let Some(password) = draft.password.as_deref() {
            validate_password_strength(password)?;
            user.password_hash = hash(password)?;
        }
        if user.role.is_admin() && !draft.role.is_admin() {
            self.ensure_other_admin_exists("demote").await?;
        }
        user.email = draft.email;
        user.first_name = draft.first_name;
        user.last_name = draft.last_name;
        user.role = draft.role;
        user.updated_at = Utc::now();

        let user = self.repos.users().update(user).await?;
        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    pub async fn delete_user(&self, raw_id: &str) -> DomainResult<()> {
        let id = Uuid::parse_str(raw_id)
            .map_err(|_| DomainError::not_found("User", "id", raw_id))?;
        let user = self.repos.users().view(id).await?;
        if user.role.is_admin() {
            self.ensure_other_admin_exists("delete").await?;
        }
        self.repos.users().delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// The account store must always keep one admin who can manage users.
    async fn ensure_other_admin_exists(&self, action: &str) -> DomainResult<()> {
        if self.repos.users().count_admins().await? <= 1 {
            warn!(action, "Refused to remove the last admin");
            return Err(DomainError::Conflict(format!(
                "Cannot {} the last admin account",
                action
            )));
        }
        Ok(())
    }

    /// Create the bootstrap admin when no accounts exist yet.
    /// Returns `true` if an account was created.
    pub async fn ensure_default_admin(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<bool> {
        if self.repos.users().count().await? > 0 {
            return Ok(false);
        }

        self.create_user(UserDraft {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role: UserRole::Admin,
            password: Some(password.to_string()),
        })
        .await?;
        Ok(true)
    }
}

fn hash(password: &str) -> DomainResult<String> {
    hash_password(password).map_err(|e| {
        error!(error = %e, "Failed to hash password");
        DomainError::Storage(format!("Failed to hash password: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::verify_token;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_database;

    async fn service() -> UserService {
        let repos = SeaOrmRepositoryProvider::new(test_database().await);
        UserService::new(Arc::new(repos), JwtConfig::new("test-secret", 1))
    }

    fn draft(email: &str, password: Option<&str>) -> UserDraft {
        UserDraft {
            email: email.into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            role: UserRole::Member,
            password: password.map(String::from),
        }
    }

    #[tokio::test]
    async fn weak_password_is_rejected() {
        let svc = service().await;
        for weak in ["short1!", "alllowercase1!", "NoDigitsHere!", "NoSpecial123"] {
            let err = svc
                .create_user(draft("weak@example.com", Some(weak)))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{weak}: {err:?}");
        }
    }

    #[tokio::test]
    async fn password_is_required_on_create() {
        let svc = service().await;
        let err = svc
            .create_user(draft("nopw@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn login_issues_verifiable_token() {
        let svc = service().await;
        let user = svc
            .create_user(draft("grace@example.com", Some("Cobol#1959")))
            .await
            .unwrap();
        assert_ne!(user.password_hash, "Cobol#1959");

        let auth = svc.login("grace@example.com", "Cobol#1959").await.unwrap();
        assert_eq!(auth.token_type, "Bearer");
        assert_eq!(auth.expires_in, 3600);

        let claims = verify_token(&auth.token, svc.jwt_config()).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, "member");
    }

    #[tokio::test]
    async fn login_failures_are_unauthorized() {
        let svc = service().await;
        svc.create_user(draft("grace@example.com", Some("Cobol#1959")))
            .await
            .unwrap();

        let wrong_pw = svc.login("grace@example.com", "Fortran#57").await.unwrap_err();
        assert!(matches!(wrong_pw, DomainError::Unauthorized(_)));
        let unknown = svc.login("nobody@example.com", "Cobol#1959").await.unwrap_err();
        assert!(matches!(unknown, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn update_keeps_password_unless_supplied() {
        let svc = service().await;
        let user = svc
            .create_user(draft("grace@example.com", Some("Cobol#1959")))
            .await
            .unwrap();

        let mut change = draft("grace@navy.mil", None);
        change.role = UserRole::Admin;
        let updated = svc.update_user(user.id, change).await.unwrap();
        assert_eq!(updated.password_hash, user.password_hash);
        assert_eq!(updated.role, UserRole::Admin);

        let err = svc
            .update_user(user.id, draft("grace@navy.mil", Some("weak")))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn last_admin_cannot_be_demoted_or_deleted() {
        let svc = service().await;
        svc.ensure_default_admin("admin@example.com", "Admin#2024", "Site", "Admin")
            .await
            .unwrap();
        let admin = svc
            .search(&UserLookup::Email("admin@example.com".into()))
            .await
            .unwrap();

        let err = svc
            .update_user(admin.id, draft("admin@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
        let err = svc.delete_user(&admin.id.to_string()).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
        assert!(svc.view(&admin.id.to_string()).await.unwrap().role.is_admin());

        // Renaming without a role change is still allowed.
        let mut rename = draft("root@example.com", None);
        rename.role = UserRole::Admin;
        assert_eq!(
            svc.update_user(admin.id, rename).await.unwrap().email,
            "root@example.com"
        );
    }

    #[tokio::test]
    async fn admin_can_step_down_once_another_exists() {
        let svc = service().await;
        let mut first = draft("first@example.com", Some("Cobol#1959"));
        first.role = UserRole::Admin;
        let first = svc.create_user(first).await.unwrap();
        let mut second = draft("second@example.com", Some("Cobol#1959"));
        second.role = UserRole::Admin;
        let second = svc.create_user(second).await.unwrap();

        let demoted = svc
            .update_user(first.id, draft("first@example.com", None))
            .await
            .unwrap();
        assert_eq!(demoted.role, UserRole::Member);

        let err = svc.delete_user(&second.id.to_string()).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        svc.delete_user(&first.id.to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn default_admin_is_created_once() {
        let svc = service().await;
        assert!(svc
            .ensure_default_admin("admin@example.com", "Admin#2024", "Site", "Admin")
            .await
            .unwrap());
        assert!(!svc
            .ensure_default_admin("other@example.com", "Admin#2024", "Site", "Admin")
            .await
            .unwrap());

        let admin = svc
            .search(&UserLookup::Email("admin@example.com".into()))
            .await
            .unwrap();
        assert!(admin.role.is_admin());
    }

    #[tokio::test]
    async fn principal_reflects_stored_role() {
        let svc = service().await;
        let user = svc
            .create_user(draft("grace@example.com", Some("Cobol#1959")))
            .await
            .unwrap();
        assert_eq!(svc.principal(user.id).await.unwrap().role, UserRole::Member);

        let mut promote = draft("grace@example.com", None);
        promote.role = UserRole::Admin;
        svc.update_user(user.id, promote).await.unwrap();
        assert!(svc.principal(user.id).await.unwrap().is_admin());

        assert!(svc.principal(Uuid::new_v4()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn view_with_malformed_id_is_not_found() {
        let svc = service().await;
        assert!(svc.view("abc").await.unwrap_err().is_not_found());
        assert!(svc.delete_user("abc").await.unwrap_err().is_not_found());
    }
}
