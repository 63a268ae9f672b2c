//! Application layer: use-case orchestration over the domain repositories.

pub mod identity;
pub mod menu;

pub use identity::{AuthResult, UserService};
pub use menu::{MenuService, SectionDetail};
