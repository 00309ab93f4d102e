// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// A thread panicked while holding the catalog lock
    #[error("Catalog state is poisoned")]
    StatePoisoned,
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_convert() {
        let err: AppError = DomainError::NotFound(3).into();
        assert_eq!(err.to_string(), "Domain error: Book with ID 3 not found");
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::StatePoisoned).unwrap();
        assert_eq!(json, "\"Catalog state is poisoned\"");
    }
}
