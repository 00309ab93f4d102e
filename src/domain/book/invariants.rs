use super::entity::{Book, BookField};
use crate::domain::{DomainError, DomainResult};

/// Validates all invariants of a stored Book
pub fn validate_book(book: &Book, current_year: i32) -> DomainResult<()> {
    validate_stored_text(&book.title, BookField::Title)?;
    validate_stored_text(&book.author, BookField::Author)?;
    validate_year(book.year, current_year)?;
    validate_read_state(book)?;
    Ok(())
}

/// Title cannot be empty after trimming
/// Returns the trimmed title
pub fn validate_title(title: &str) -> DomainResult<String> {
    non_empty_trimmed(title, BookField::Title)
}

/// Author cannot be empty after trimming
/// Returns the trimmed author
pub fn validate_author(author: &str) -> DomainResult<String> {
    non_empty_trimmed(author, BookField::Author)
}

/// Year must lie in 0..=current_year
pub fn validate_year(year: i32, current_year: i32) -> DomainResult<i32> {
    if !(0..=current_year).contains(&year) {
        return Err(DomainError::validation(BookField::Year));
    }
    Ok(year)
}

fn non_empty_trimmed(value: &str, field: BookField) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field));
    }
    Ok(trimmed.to_string())
}

/// Stored text is already trimmed, so it must equal its own trim
fn validate_stored_text(value: &str, field: BookField) -> DomainResult<()> {
    if value.is_empty() || value.trim() != value {
        return Err(DomainError::validation(field));
    }
    Ok(())
}

/// read_date is present iff is_read
fn validate_read_state(book: &Book) -> DomainResult<()> {
    if book.is_read != book.read_date.is_some() {
        return Err(DomainError::InvariantViolation(format!(
            "Book {} has is_read={} but read_date={:?}",
            book.id, book.is_read, book.read_date
        )));
    }
    Ok(())
}

// Invariants that must hold true for the Book domain:
//
// 1. Identity is assigned by the catalog and never changes
// 2. Title and author are trimmed and non-empty
// 3. Year lies in 0..=current year at the time of validation
// 4. added_date never changes
// 5. read_date exists iff the book is read
