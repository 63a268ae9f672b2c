//! Database entities module

pub mod item;
pub mod section;
pub mod user;

pub use item::Entity as Item;
pub use section::Entity as Section;
pub use user::Entity as User;
