use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("users.json is unreadable");
        assert_eq!(error.to_string(), "Storage error: users.json is unreadable");
    }

    #[test]
    fn test_internal_error() {
        let error = DomainError::internal("lock poisoned");
        assert_eq!(error.to_string(), "Internal error: lock poisoned");
    }
}
