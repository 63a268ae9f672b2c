//! # Menu Service
//!
//! Restaurant menu management backend: CRUD over menu sections and the
//! items they own, with admin-gated writes and account management.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities, lookup keys and repository traits
//! - **application**: Use cases (`MenuService`, `UserService`)
//! - **infrastructure**: SeaORM persistence, migrations, crypto
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error taxonomy, string classifiers, shutdown coordination

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
