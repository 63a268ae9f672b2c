use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Raw store failure. The message is for server-side logs only.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Text that may be shown to API clients.
    pub fn public_message(&self) -> String {
        match self {
            Self::Storage(_) => "internal storage error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_detail_is_hidden_from_clients() {
        let err = DomainError::Storage("no such table: sections".into());
        assert_eq!(err.public_message(), "internal storage error");
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn not_found_names_entity_and_key() {
        let err = DomainError::not_found("Section", "id", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.public_message(), "Not found: Section with id=abc");
    }
}
