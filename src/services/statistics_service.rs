// src/services/statistics_service.rs
//
// Derives library statistics from a snapshot of the catalog.
// Pure computation: never touches catalog state.

use std::collections::HashMap;

use crate::domain::book::Book;
use crate::domain::statistics::{AuthorStatistics, LibraryStatistics};

pub fn calculate_library_statistics(books: &[Book], no_data_label: &str) -> LibraryStatistics {
    let total = books.len();
    if total == 0 {
        return LibraryStatistics::empty(no_data_label);
    }

    let read = books.iter().filter(|book| book.is_read).count();
    let percentage = (read as f64 / total as f64 * 100.0).round() as u32;

    let authors = group_by_author(books);
    let authors_count = authors.len();
    let popular_author = most_popular(&authors)
        .map(|group| group.author.clone())
        .unwrap_or_else(|| no_data_label.to_string());

    LibraryStatistics {
        total,
        read,
        unread: total - read,
        percentage,
        authors_count,
        popular_author,
        books_per_author: to_fixed_tenth(total as f64 / authors_count as f64),
        authors,
    }
}

/// Group by exact author string, keeping first-appearance order
fn group_by_author(books: &[Book]) -> Vec<AuthorStatistics> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<AuthorStatistics> = Vec::new();

    for book in books {
        let slot = *index.entry(book.author.as_str()).or_insert_with(|| {
            groups.push(AuthorStatistics {
                author: book.author.clone(),
                count: 0,
                read_count: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.count += 1;
        if book.is_read {
            group.read_count += 1;
        }
    }

    groups
}

/// Strictly greater wins, so the earliest group keeps a tie
fn most_popular(groups: &[AuthorStatistics]) -> Option<&AuthorStatistics> {
    groups.iter().fold(None, |best: Option<&AuthorStatistics>, group| match best {
        Some(current) if group.count <= current.count => Some(current),
        _ => Some(group),
    })
}

/// Nearest tenth of the exact binary value, like JavaScript's `toFixed(1)`.
///
/// Only an exact tie (an odd number of quarters, e.g. 1.25) rounds upward.
/// Anything else is correctly rounded from the stored double, so 23/20
/// (1.1499999...) gives 1.1 rather than 1.2.
fn to_fixed_tenth(value: f64) -> f64 {
    let quarters = value * 4.0;
    let exact_tie = quarters.fract() == 0.0 && quarters % 2.0 == 1.0;
    if exact_tie {
        // value * 10 is exact for quarter values
        return (value * 10.0).round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}
