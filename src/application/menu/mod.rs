//! Menu module: sections and the items they own.

pub mod service;

pub use service::{MenuService, SectionDetail};
