//! API router with Swagger UI
//!
//! Every endpoint is declared once in [`route_table`] together with its
//! access level. The builder wraps `Authenticated` and `Admin` entries in
//! the matching auth middleware, so a handler never runs for a caller the
//! table does not admit.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, patch, post, MethodRouter},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::middleware::{require_admin, require_auth, AuthState};
use super::modules::metrics::{http_metrics_middleware, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::{auth, health, items, metrics, sections, users};
use crate::application::{MenuService, UserService};

/// Shared state for every route. Each handler extracts only its own
/// slice through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<MenuService>,
    pub users: Arc<UserService>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
    pub metrics: PrometheusHandle,
}

impl FromRef<AppState> for sections::SectionHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            menu: Arc::clone(&s.menu),
        }
    }
}

impl FromRef<AppState> for items::ItemHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            menu: Arc::clone(&s.menu),
        }
    }
}

impl FromRef<AppState> for auth::AuthHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            user_service: Arc::clone(&s.users),
        }
    }
}

impl FromRef<AppState> for users::UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            user_service: Arc::clone(&s.users),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for MetricsState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            handle: s.metrics.clone(),
        }
    }
}

/// Who may call a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any caller with a valid bearer token
    Authenticated,
    /// Bearer token carrying the admin role
    Admin,
}

pub struct RouteEntry {
    pub path: &'static str,
    pub access: Access,
    pub handler: MethodRouter<AppState>,
}

fn entry(path: &'static str, access: Access, handler: MethodRouter<AppState>) -> RouteEntry {
    RouteEntry {
        path,
        access,
        handler,
    }
}

/// The complete endpoint table. Entries sharing a path are merged, so the
/// public and admin methods of one resource can carry different access.
pub fn route_table() -> Vec<RouteEntry> {
    use Access::{Admin, Authenticated, Public};

    vec![
        // Sections
        entry("/api/v1/sections", Public, get(sections::list_sections)),
        entry("/api/v1/sections", Admin, post(sections::create_section)),
        entry("/api/v1/sections/{id}", Public, get(sections::get_section)),
        entry(
            "/api/v1/sections/{id}",
            Admin,
            patch(sections::update_section).delete(sections::delete_section),
        ),
        // Items
        entry("/api/v1/items", Public, get(items::list_items)),
        entry("/api/v1/items", Admin, post(items::create_item)),
        entry("/api/v1/items/{id}", Public, get(items::get_item)),
        entry(
            "/api/v1/items/{id}",
            Admin,
            patch(items::update_item).delete(items::delete_item),
        ),
        // Auth
        entry("/api/v1/auth/login", Public, post(auth::login)),
        entry("/api/v1/auth/me", Authenticated, get(auth::get_current_user)),
        // Users
        entry(
            "/api/v1/users",
            Admin,
            get(users::search_users).post(users::create_user),
        ),
        entry(
            "/api/v1/users/{id}",
            Admin,
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        ),
        // Operations
        entry("/health", Public, get(health::health_check)),
        entry("/metrics", Public, get(metrics::prometheus_metrics)),
    ]
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::get_current_user,
        sections::list_sections,
        sections::get_section,
        sections::create_section,
        sections::update_section,
        sections::delete_section,
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        users::get_user,
        users::search_users,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            sections::SectionRequest,
            sections::SectionDto,
            sections::SectionDetailDto,
            items::ItemRequest,
            items::ItemDto,
            users::RoleDto,
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Login (JWT) and current user"),
        (name = "Sections", description = "Menu sections; writes require the admin role"),
        (name = "Items", description = "Menu items; writes require the admin role"),
        (name = "Users", description = "Account management (admin only)"),
    ),
    info(
        title = "Menu Service API",
        version = "1.0.0",
        description = "REST API for managing a restaurant menu",
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let auth_state = AuthState {
        jwt_config: state.users.jwt_config().clone(),
        users: Arc::clone(&state.users),
    };

    let mut router = Router::new();
    for RouteEntry {
        path,
        access,
        handler,
    } in route_table()
    {
        let handler = match access {
            Access::Public => handler,
            Access::Authenticated => handler.route_layer(middleware::from_fn_with_state(
                auth_state.clone(),
                require_auth,
            )),
            Access::Admin => handler.route_layer(middleware::from_fn_with_state(
                auth_state.clone(),
                require_admin,
            )),
        };
        router = router.route(path, handler);
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_reads_are_public_and_users_are_admin() {
        let table = route_table();
        let access_of = |path: &str| -> Vec<Access> {
            table
                .iter()
                .filter(|e| e.path == path)
                .map(|e| e.access)
                .collect()
        };

        assert_eq!(access_of("/api/v1/sections"), [Access::Public, Access::Admin]);
        assert_eq!(access_of("/api/v1/items/{id}"), [Access::Public, Access::Admin]);
        assert_eq!(access_of("/api/v1/users"), [Access::Admin]);
        assert_eq!(access_of("/api/v1/auth/login"), [Access::Public]);
        assert_eq!(access_of("/api/v1/auth/me"), [Access::Authenticated]);
    }

    #[test]
    fn openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths: HashSet<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in [
            "/api/v1/sections",
            "/api/v1/sections/{id}",
            "/api/v1/items",
            "/api/v1/items/{id}",
            "/api/v1/auth/login",
            "/api/v1/users/{id}",
            "/health",
        ] {
            assert!(paths.contains(p), "missing {p}");
        }
    }
}
