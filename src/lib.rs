// src/lib.rs
// Bookshelf - Local-first personal book catalog
//
// Architecture:
// - Domain-centric: Book invariants and errors live in the domain
// - Explicit: No implicit behavior, no magic
// - Injected time: every "today" comes from a Clock
// - Application Layer: UI boundary with a shared, locked catalog

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_author,
    validate_book,
    validate_title,
    validate_year,
    // Statistics
    AuthorStatistics,
    // Book
    Book,
    BookField,
    BookId,
    BookUpdate,
    DomainError,
    DomainResult,
    LibraryStatistics,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{Clock, FixedClock, SystemClock};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{BookRepository, InMemoryBookRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{calculate_library_statistics, Catalog, CatalogConfig, SortOrder};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;
