// src/services/catalog_service.rs
//
// The book catalog: identity assignment, validation, mutation and queries.
//
// RULES:
// - Every failure leaves the collection and the identity counter untouched
// - Every returned Book is an owned copy
// - No logging here; callers decide what to report

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::book::{validate_author, validate_title, validate_year, Book, BookId, BookUpdate};
use crate::domain::statistics::LibraryStatistics;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::{Clock, SystemClock};
use crate::repositories::{BookRepository, InMemoryBookRepository};
use crate::services::statistics_service::calculate_library_statistics;

/// Direction for year ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// "desc" selects descending; anything else is ascending
    pub fn from_param(param: &str) -> Self {
        if param == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Year ordering used when a caller does not pick one
    pub default_sort_order: SortOrder,
    /// `popular_author` of an empty catalog
    pub no_data_label: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_sort_order: SortOrder::Asc,
            no_data_label: "no data".to_string(),
        }
    }
}

pub struct Catalog {
    repo: Box<dyn BookRepository>,
    clock: Arc<dyn Clock>,
    config: CatalogConfig,
    next_id: BookId,
}

impl Catalog {
    /// In-memory catalog with default configuration
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_parts(
            Box::new(InMemoryBookRepository::new()),
            clock,
            CatalogConfig::default(),
        )
    }

    pub fn with_parts(
        repo: Box<dyn BookRepository>,
        clock: Arc<dyn Clock>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            repo,
            clock,
            config,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ========================================================================
    // CREATE / DELETE
    // ========================================================================

    pub fn add_book(&mut self, title: &str, author: &str, year: i32) -> DomainResult<Book> {
        let title = validate_title(title)?;
        let author = validate_author(author)?;
        let year = validate_year(year, self.clock.current_year())?;

        let book = Book::new(self.next_id, title, author, year, self.clock.today());
        self.next_id += 1;
        self.repo.save(book.clone());

        Ok(book)
    }

    pub fn remove_book(&mut self, id: BookId) -> DomainResult<()> {
        if !self.repo.delete(id) {
            return Err(DomainError::NotFound(id));
        }
        Ok(())
    }

    /// Drop every book and restart identities at 1
    pub fn clear_library(&mut self) {
        self.repo.clear();
        self.next_id = 1;
    }

    // ========================================================================
    // SEARCH
    // ========================================================================

    pub fn find_books_by_author(&self, query: &str) -> Vec<Book> {
        self.find_by(query, |book| book.author.as_str())
    }

    pub fn find_books_by_title(&self, query: &str) -> Vec<Book> {
        self.find_by(query, |book| book.title.as_str())
    }

    /// Case-insensitive substring search. An empty query matches nothing;
    /// a whitespace-only one trims to the empty needle and matches everything.
    fn find_by<F>(&self, query: &str, field: F) -> Vec<Book>
    where
        F: Fn(&Book) -> &str,
    {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.trim().to_lowercase();
        self.repo
            .list_all()
            .into_iter()
            .filter(|book| field(book).to_lowercase().contains(&needle))
            .collect()
    }

    // ========================================================================
    // READ STATUS
    // ========================================================================

    pub fn mark_as_read(&mut self, id: BookId) -> DomainResult<Book> {
        let mut book = self.require(id)?;
        if book.is_read {
            return Err(DomainError::AlreadyRead { title: book.title });
        }

        book.mark_read(self.clock.today());
        self.repo.save(book.clone());
        Ok(book)
    }

    /// Idempotent: an unread book stays unread without error
    pub fn mark_as_unread(&mut self, id: BookId) -> DomainResult<Book> {
        let mut book = self.require(id)?;
        book.mark_unread();
        self.repo.save(book.clone());
        Ok(book)
    }

    // ========================================================================
    // UPDATE
    // ========================================================================

    /// All provided fields are validated before any is applied
    pub fn update_book(&mut self, id: BookId, update: BookUpdate) -> DomainResult<Book> {
        let mut book = self.require(id)?;
        let update = update.validated(self.clock.current_year())?;

        book.apply_fields(update.title, update.author, update.year);
        self.repo.save(book.clone());
        Ok(book)
    }

    /// Update from a loosely-typed JSON object; keys outside
    /// title/author/year are rejected together
    pub fn update_book_fields(
        &mut self,
        id: BookId,
        fields: &Map<String, Value>,
    ) -> DomainResult<Book> {
        if !self.repo.exists(id) {
            return Err(DomainError::NotFound(id));
        }
        let update = BookUpdate::from_fields(fields)?;
        self.update_book(id, update)
    }

    // ========================================================================
    // READ ACCESSORS
    // ========================================================================

    pub fn get_books(&self) -> Vec<Book> {
        self.repo.list_all()
    }

    pub fn get_book_by_id(&self, id: BookId) -> DomainResult<Book> {
        self.require(id)
    }

    pub fn get_books_count(&self) -> usize {
        self.repo.count()
    }

    /// Stable ascending sort; descending is the ascending result reversed
    pub fn get_books_sorted_by_year(&self, order: SortOrder) -> Vec<Book> {
        let mut books = self.repo.list_all();
        books.sort_by_key(|book| book.year);
        if order == SortOrder::Desc {
            books.reverse();
        }
        books
    }

    /// Stable sort by author name
    pub fn get_books_sorted_by_author(&self) -> Vec<Book> {
        let mut books = self.repo.list_all();
        books.sort_by(|a, b| compare_authors(&a.author, &b.author));
        books
    }

    pub fn get_statistics(&self) -> LibraryStatistics {
        calculate_library_statistics(&self.repo.list_all(), &self.config.no_data_label)
    }

    fn require(&self, id: BookId) -> DomainResult<Book> {
        self.repo.get_by_id(id).ok_or(DomainError::NotFound(id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

/// Collation fallback: case-insensitive first, then lowercase before uppercase
pub fn compare_authors(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
