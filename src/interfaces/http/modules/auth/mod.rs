//! Auth module: login and current-user lookup

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
