// src/application/commands/book_commands.rs
//
// Book Command Handlers
//
// RULES:
// - Accept DTOs
// - Call the catalog through AppState
// - Return DTOs
// - Never contain business logic

use log::{debug, info};
use serde_json::Value;

use crate::application::dto::{BookDto, CreateBookDto};
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::{Book, BookId};
use crate::services::SortOrder;

fn to_dtos(books: Vec<Book>) -> Vec<BookDto> {
    books.into_iter().map(BookDto::from).collect()
}

/// List all books in insertion order
pub fn list_books(state: &AppState) -> Result<Vec<BookDto>, String> {
    debug!("list_books");
    state
        .with_catalog(|catalog| to_dtos(catalog.get_books()))
        .to_error_response()
}

/// Get a single book by ID
pub fn get_book(state: &AppState, book_id: BookId) -> Result<BookDto, String> {
    debug!("get_book: id={}", book_id);
    state
        .try_with_catalog(|catalog| catalog.get_book_by_id(book_id))
        .map(BookDto::from)
        .to_error_response()
}

pub fn count_books(state: &AppState) -> Result<usize, String> {
    state
        .with_catalog(|catalog| catalog.get_books_count())
        .to_error_response()
}

/// Add a new book
pub fn add_book(state: &AppState, dto: CreateBookDto) -> Result<BookDto, String> {
    debug!("add_book: title={:?} author={:?} year={}", dto.title, dto.author, dto.year);

    let book = state
        .try_with_catalog(|catalog| catalog.add_book(&dto.title, &dto.author, dto.year))
        .to_error_response()?;

    info!("Book {} added: {:?} by {:?}", book.id, book.title, book.author);
    Ok(BookDto::from(book))
}

pub fn remove_book(state: &AppState, book_id: BookId) -> Result<(), String> {
    debug!("remove_book: id={}", book_id);
    state
        .try_with_catalog(|catalog| catalog.remove_book(book_id))
        .to_error_response()?;

    info!("Book {} removed", book_id);
    Ok(())
}

/// Update title/author/year from a JSON object of changed fields
pub fn update_book(state: &AppState, book_id: BookId, fields: Value) -> Result<BookDto, String> {
    debug!("update_book: id={} fields={}", book_id, fields);

    let Value::Object(fields) = fields else {
        return Err(ErrorResponse::validation("Update payload must be a JSON object".to_string()).to_json());
    };

    let book = state
        .try_with_catalog(|catalog| catalog.update_book_fields(book_id, &fields))
        .to_error_response()?;

    info!("Book {} updated", book.id);
    Ok(BookDto::from(book))
}

pub fn mark_book_read(state: &AppState, book_id: BookId) -> Result<BookDto, String> {
    debug!("mark_book_read: id={}", book_id);
    let book = state
        .try_with_catalog(|catalog| catalog.mark_as_read(book_id))
        .to_error_response()?;

    info!("Book {} marked as read", book.id);
    Ok(BookDto::from(book))
}

pub fn mark_book_unread(state: &AppState, book_id: BookId) -> Result<BookDto, String> {
    debug!("mark_book_unread: id={}", book_id);
    let book = state
        .try_with_catalog(|catalog| catalog.mark_as_unread(book_id))
        .to_error_response()?;

    info!("Book {} marked as unread", book.id);
    Ok(BookDto::from(book))
}

/// Search by author; a missing query yields no results
pub fn find_books_by_author(state: &AppState, query: Option<String>) -> Result<Vec<BookDto>, String> {
    debug!("find_books_by_author: query={:?}", query);
    let query = query.unwrap_or_default();
    state
        .with_catalog(|catalog| to_dtos(catalog.find_books_by_author(&query)))
        .to_error_response()
}

/// Search by title; a missing query yields no results
pub fn find_books_by_title(state: &AppState, query: Option<String>) -> Result<Vec<BookDto>, String> {
    debug!("find_books_by_title: query={:?}", query);
    let query = query.unwrap_or_default();
    state
        .with_catalog(|catalog| to_dtos(catalog.find_books_by_title(&query)))
        .to_error_response()
}

/// Sort by year; `order` is "asc" or "desc", defaulting to the catalog's configured order
pub fn list_books_sorted_by_year(
    state: &AppState,
    order: Option<String>,
) -> Result<Vec<BookDto>, String> {
    debug!("list_books_sorted_by_year: order={:?}", order);
    state
        .with_catalog(|catalog| {
            let order = order
                .as_deref()
                .map(SortOrder::from_param)
                .unwrap_or(catalog.config().default_sort_order);
            to_dtos(catalog.get_books_sorted_by_year(order))
        })
        .to_error_response()
}

pub fn list_books_sorted_by_author(state: &AppState) -> Result<Vec<BookDto>, String> {
    debug!("list_books_sorted_by_author");
    state
        .with_catalog(|catalog| to_dtos(catalog.get_books_sorted_by_author()))
        .to_error_response()
}

/// Remove every book and restart identities
pub fn clear_library(state: &AppState) -> Result<(), String> {
    state
        .with_catalog(|catalog| catalog.clear_library())
        .to_error_response()?;

    info!("Library cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::infrastructure::FixedClock;
    use crate::services::Catalog;
    use serde_json::json;
    use std::sync::Arc;

    fn state() -> AppState {
        let clock = Arc::new(FixedClock::ymd(2024, 6, 15).unwrap());
        AppState::new(Catalog::new(clock))
    }

    fn create(title: &str, author: &str, year: i32) -> CreateBookDto {
        CreateBookDto {
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    fn error_type(message: &str) -> ErrorType {
        serde_json::from_str::<ErrorResponse>(message).unwrap().error_type
    }

    #[test]
    fn test_add_and_get() {
        let state = state();
        let added = add_book(&state, create(" Dune ", "Frank Herbert", 1965)).unwrap();
        assert_eq!(added.title, "Dune");
        assert_eq!(added.added_date, "2024-06-15");
        assert_eq!(get_book(&state, added.id).unwrap(), added);
        assert_eq!(count_books(&state).unwrap(), 1);
    }

    #[test]
    fn test_errors_are_json_responses() {
        let state = state();
        assert_eq!(error_type(&get_book(&state, 1).unwrap_err()), ErrorType::NotFound);
        assert_eq!(
            error_type(&add_book(&state, create("", "x", 2000)).unwrap_err()),
            ErrorType::Validation
        );
    }

    #[test]
    fn test_update_requires_object() {
        let state = state();
        let added = add_book(&state, create("Dune", "Frank Herbert", 1965)).unwrap();

        let err = update_book(&state, added.id, json!(["title"])).unwrap_err();
        assert_eq!(error_type(&err), ErrorType::Validation);

        let updated = update_book(&state, added.id, json!({ "year": 1966 })).unwrap();
        assert_eq!(updated.year, 1966);
    }

    #[test]
    fn test_read_cycle() {
        let state = state();
        let added = add_book(&state, create("Dune", "Frank Herbert", 1965)).unwrap();

        let read = mark_book_read(&state, added.id).unwrap();
        assert_eq!(read.read_date.as_deref(), Some("2024-06-15"));
        assert_eq!(error_type(&mark_book_read(&state, added.id).unwrap_err()), ErrorType::Conflict);

        let unread = mark_book_unread(&state, added.id).unwrap();
        assert!(!unread.is_read);
        assert_eq!(unread.read_date, None);
    }

    #[test]
    fn test_search_without_query() {
        let state = state();
        add_book(&state, create("Dune", "Frank Herbert", 1965)).unwrap();
        assert!(find_books_by_author(&state, None).unwrap().is_empty());
        assert_eq!(find_books_by_author(&state, Some("herb".to_string())).unwrap().len(), 1);
        assert_eq!(find_books_by_title(&state, Some("DUNE".to_string())).unwrap().len(), 1);
    }

    #[test]
    fn test_sorting_commands() {
        let state = state();
        add_book(&state, create("B", "beta", 2010)).unwrap();
        add_book(&state, create("A", "Alpha", 2000)).unwrap();

        let default_order: Vec<i32> = list_books_sorted_by_year(&state, None)
            .unwrap()
            .iter()
            .map(|b| b.year)
            .collect();
        assert_eq!(default_order, vec![2000, 2010]);

        let desc: Vec<i32> = list_books_sorted_by_year(&state, Some("desc".to_string()))
            .unwrap()
            .iter()
            .map(|b| b.year)
            .collect();
        assert_eq!(desc, vec![2010, 2000]);

        let authors: Vec<String> = list_books_sorted_by_author(&state)
            .unwrap()
            .into_iter()
            .map(|b| b.author)
            .collect();
        assert_eq!(authors, vec!["Alpha", "beta"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let state = state();
        let a = add_book(&state, create("A", "x", 2000)).unwrap();
        add_book(&state, create("B", "x", 2000)).unwrap();

        remove_book(&state, a.id).unwrap();
        assert_eq!(error_type(&remove_book(&state, a.id).unwrap_err()), ErrorType::NotFound);

        clear_library(&state).unwrap();
        assert!(list_books(&state).unwrap().is_empty());
        assert_eq!(add_book(&state, create("C", "x", 2000)).unwrap().id, 1);
    }
}
