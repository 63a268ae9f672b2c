//! Common HTTP building blocks shared by every module

pub mod error;
pub mod response;
pub mod validated_json;

pub use error::ApiError;
pub use response::ApiResponse;
pub use validated_json::ValidatedJson;
