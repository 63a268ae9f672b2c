//! Input validation helpers

pub mod password;
pub mod strings;

pub use password::{validate_password_strength, MIN_PASSWORD_LENGTH};
pub use strings::{has_alpha_num, has_mixed_case, has_special_char, SPECIAL_CHARS};
