// src/application/commands/statistics_commands.rs

use log::debug;

use crate::application::dto::StatisticsDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;

/// Get library statistics
pub fn get_library_statistics(state: &AppState) -> Result<StatisticsDto, String> {
    debug!("get_library_statistics");
    state
        .with_catalog(|catalog| StatisticsDto::from(catalog.get_statistics()))
        .to_error_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::{add_book, mark_book_read};
    use crate::application::dto::CreateBookDto;

    #[test]
    fn test_statistics_command() {
        let state = AppState::default();
        let empty = get_library_statistics(&state).unwrap();
        assert_eq!(empty.total, 0);
        assert_eq!(empty.popular_author, "no data");

        let book = add_book(
            &state,
            CreateBookDto {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                year: 1965,
            },
        )
        .unwrap();
        mark_book_read(&state, book.id).unwrap();

        let stats = get_library_statistics(&state).unwrap();
        assert_eq!(stats.percentage, 100);
        assert_eq!(stats.popular_author, "Frank Herbert");
        assert_eq!(stats.books_per_author, "1.0");
    }
}
