//! Section aggregate

pub mod model;
pub mod repository;

pub use model::{Section, SectionDraft};
pub use repository::SectionRepository;
