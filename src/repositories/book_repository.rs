// src/repositories/book_repository.rs
//
// Ordered in-memory book storage

use crate::domain::book::{Book, BookId};

/// Storage seam for the catalog.
/// Implementations keep insertion order; every read hands out owned copies.
pub trait BookRepository: Send {
    /// Insert a new book at the end, or replace the stored book with the same id in place
    fn save(&mut self, book: Book);
    fn get_by_id(&self, id: BookId) -> Option<Book>;
    fn list_all(&self) -> Vec<Book>;
    /// Returns false when nothing was stored under `id`
    fn delete(&mut self, id: BookId) -> bool;
    fn exists(&self, id: BookId) -> bool;
    fn count(&self) -> usize;
    fn clear(&mut self);
}

#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}

impl BookRepository for InMemoryBookRepository {
    fn save(&mut self, book: Book) {
        match self.position(book.id) {
            Some(index) => self.books[index] = book,
            None => self.books.push(book),
        }
    }

    fn get_by_id(&self, id: BookId) -> Option<Book> {
        self.books.iter().find(|book| book.id == id).cloned()
    }

    fn list_all(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn delete(&mut self, id: BookId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    fn exists(&self, id: BookId) -> bool {
        self.position(id).is_some()
    }

    fn count(&self) -> usize {
        self.books.len()
    }

    fn clear(&mut self) {
        self.books.clear();
    }
}
