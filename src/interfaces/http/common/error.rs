//! Mapping from domain failures to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::ApiResponse;
use crate::domain::DomainError;

/// A failed request: status code plus client-safe text.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Convert a domain failure. `Unauthorized` always maps to 401;
    /// everything else takes the route's `fallback` status.
    pub fn from_domain(err: DomainError, fallback: StatusCode) -> Self {
        let status = match &err {
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            _ => fallback,
        };
        Self::new(status, err.public_message())
    }

    /// Failure of an operation on a single entity.
    pub fn single(err: DomainError) -> Self {
        Self::from_domain(err, StatusCode::BAD_REQUEST)
    }

    /// Failure of a collection listing.
    pub fn list(err: DomainError) -> Self {
        Self::from_domain(err, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.message))).into_response()
    }
}
