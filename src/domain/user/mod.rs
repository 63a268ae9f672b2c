//! User aggregate
//!
//! Contains the User entity, lookup keys, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Principal, User, UserDraft, UserLookup, UserRole};
pub use repository::UserRepository;
