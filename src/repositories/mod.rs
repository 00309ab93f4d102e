// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO identity assignment (the catalog owns the counter)

pub mod book_repository;

pub use book_repository::{BookRepository, InMemoryBookRepository};
