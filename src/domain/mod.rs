// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Book Domain
pub use book::{
    validate_author, validate_book, validate_title, validate_year, Book, BookField, BookId,
    BookUpdate,
};

// Statistics Domain (Derived Data)
pub use statistics::{AuthorStatistics, LibraryStatistics};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A title, author or year broke its invariant
    #[error("{reason}")]
    Validation { field: BookField, reason: String },

    #[error("Book with ID {0} not found")]
    NotFound(BookId),

    #[error("Book \"{title}\" is already marked as read")]
    AlreadyRead { title: String },

    /// Update keys outside the editable field set, in the order given
    #[error("Invalid fields for update: {}", .0.join(", "))]
    InvalidFields(Vec<String>),

    /// A stored record broke a structural invariant
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    /// Build the validation error for `field` with its canonical message
    pub fn validation(field: BookField) -> Self {
        DomainError::Validation {
            field,
            reason: field.constraint().to_string(),
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fields_lists_every_key() {
        let error = DomainError::InvalidFields(vec!["isbn".to_string(), "pages".to_string()]);
        assert_eq!(error.to_string(), "Invalid fields for update: isbn, pages");
    }

    #[test]
    fn test_not_found_names_the_id() {
        assert_eq!(DomainError::NotFound(42).to_string(), "Book with ID 42 not found");
    }

    #[test]
    fn test_validation_message_names_the_field() {
        let error = DomainError::validation(BookField::Author);
        assert!(error.to_string().contains("author"));
    }
}
