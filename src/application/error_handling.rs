// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Logs errors for debugging

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// No book with the requested id (404)
    NotFound,

    /// Invalid input: bad field value or unknown update key (400)
    Validation,

    /// Request clashes with current state, e.g. already read (409)
    Conflict,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self::from_domain_error(domain_error),

            AppError::StatePoisoned => {
                error!("Catalog lock poisoned; a previous command panicked");
                Self::new(
                    ErrorType::Internal,
                    "Catalog is unavailable".to_string(),
                    Some("Check logs for details".to_string()),
                )
            }
        }
    }

    fn from_domain_error(domain_error: DomainError) -> Self {
        warn!("Command rejected: {}", domain_error);

        let error_type = match &domain_error {
            DomainError::NotFound(_) => ErrorType::NotFound,
            DomainError::Validation { .. } | DomainError::InvalidFields(_) => ErrorType::Validation,
            DomainError::AlreadyRead { .. } => ErrorType::Conflict,
            DomainError::InvariantViolation(_) => ErrorType::Internal,
        };

        let details = match &domain_error {
            DomainError::Validation { field, .. } => Some(field.to_string()),
            DomainError::InvalidFields(keys) => Some(keys.join(", ")),
            _ => None,
        };

        Self::new(error_type, domain_error.to_string(), details)
    }

    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// JSON form handed back to the caller
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}
