// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{AuthorStatistics, Book, BookId, LibraryStatistics};

// ============================================================================
// BOOK DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_read: bool,
    pub added_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub year: i32,
}

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    pub percentage: u32,
    pub authors_count: usize,
    pub popular_author: String,
    /// One decimal place, e.g. "1.5"
    pub books_per_author: String,
    pub authors: Vec<AuthorStatisticsDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStatisticsDto {
    pub author: String,
    pub count: usize,
    pub read_count: usize,
}

// ============================================================================
// CONVERSIONS (Domain → DTO)
// ============================================================================

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
            is_read: book.is_read,
            added_date: book.added_date.to_string(),
            read_date: book.read_date.map(|d| d.to_string()),
        }
    }
}

impl From<AuthorStatistics> for AuthorStatisticsDto {
    fn from(stats: AuthorStatistics) -> Self {
        Self {
            author: stats.author,
            count: stats.count,
            read_count: stats.read_count,
        }
    }
}

impl From<LibraryStatistics> for StatisticsDto {
    fn from(stats: LibraryStatistics) -> Self {
        let books_per_author = stats.books_per_author_display();
        Self {
            total: stats.total,
            read: stats.read,
            unread: stats.unread,
            percentage: stats.percentage,
            authors_count: stats.authors_count,
            popular_author: stats.popular_author,
            books_per_author,
            authors: stats.authors.into_iter().map(AuthorStatisticsDto::from).collect(),
        }
    }
}
