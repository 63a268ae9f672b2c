//! Authentication middleware for Axum
//!
//! `require_auth` accepts any valid bearer token; `require_admin` also
//! demands the admin role. The token only names the caller: the account is
//! reloaded on every request, so deleted users and revoked roles take
//! effect before the token expires. Both insert the caller as a
//! [`Principal`] into request extensions, where handlers pick it up as
//! `Extension<Principal>`. Any failure answers 401 before the handler runs.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use super::common::ApiError;
use crate::application::UserService;
use crate::domain::{Principal, UserRole};
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};

/// Authentication state: token verification plus the account store
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
    pub users: Arc<UserService>,
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

fn principal_from_claims(claims: TokenClaims) -> Option<Principal> {
    Some(Principal {
        user_id: Uuid::parse_str(&claims.sub).ok()?,
        role: claims.role.parse::<UserRole>().ok()?,
        email: claims.email,
    })
}

/// Resolve the caller from the `Authorization` header, if any.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Option<Principal> {
    let auth_header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = extract_token(auth_header)?;

    match verify_token(token, jwt_config) {
        Ok(claims) if !claims.is_expired() => principal_from_claims(claims),
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "Rejected bearer token");
            None
        }
    }
}

/// Verify the token, then replace its claims with the stored account.
async fn resolve_principal(
    auth_state: &AuthState,
    headers: &HeaderMap,
) -> Result<Principal, Response> {
    let claimed = authenticate(headers, &auth_state.jwt_config).ok_or_else(unauthorized)?;

    match auth_state.users.principal(claimed.user_id).await {
        Ok(principal) => Ok(principal),
        Err(e) if e.is_not_found() => {
            debug!(user_id = %claimed.user_id, "Token names a deleted account");
            Err(unauthorized())
        }
        Err(e) => {
            Err(ApiError::from_domain(e, StatusCode::INTERNAL_SERVER_ERROR).into_response())
        }
    }
}

/// Any authenticated caller
pub async fn require_auth(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let principal = match resolve_principal(&auth_state, request.headers()).await {
        Ok(principal) => principal,
        Err(response) => return response,
    };
    request.extensions_mut().insert(principal);
    next.run(request).await
}

/// Authenticated caller whose stored role is admin
pub async fn require_admin(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let principal = match resolve_principal(&auth_state, request.headers()).await {
        Ok(principal) => principal,
        Err(response) => return response,
    };
    if !principal.is_admin() {
        debug!(user = %principal.email, role = %principal.role, "Admin route refused");
        return unauthorized();
    }
    request.extensions_mut().insert(principal);
    next.run(request).await
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "unauthorized" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use crate::infrastructure::crypto::jwt::create_token;

    fn config() -> JwtConfig {
        JwtConfig::new("middleware-secret", 1)
    }

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn valid_token_yields_principal() {
        let id = Uuid::new_v4();
        let token = create_token(&id.to_string(), "a@b.c", "admin", &config()).unwrap();
        let principal = authenticate(&headers_with(&token), &config()).unwrap();
        assert_eq!(principal.user_id, id);
        assert!(principal.is_admin());
    }

    #[test]
    fn missing_or_malformed_header_is_rejected() {
        assert!(authenticate(&HeaderMap::new(), &config()).is_none());

        let mut basic = HeaderMap::new();
        basic.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(authenticate(&basic, &config()).is_none());

        assert!(authenticate(&headers_with("garbage"), &config()).is_none());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let token =
            create_token(&Uuid::new_v4().to_string(), "a@b.c", "owner", &config()).unwrap();
        assert!(authenticate(&headers_with(&token), &config()).is_none());
    }
}
