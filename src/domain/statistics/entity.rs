use serde::{Deserialize, Serialize};

/// Aggregate view over the whole catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStatistics {
    pub total: usize,
    pub read: usize,
    pub unread: usize,

    /// Share of read books, rounded to a whole percent
    pub percentage: u32,

    pub authors_count: usize,

    /// Author with the most books, or the configured placeholder when empty
    pub popular_author: String,

    /// Books per distinct author, rounded to one decimal place the way `toFixed(1)` does
    pub books_per_author: f64,

    /// Per-author breakdown in order of first appearance
    pub authors: Vec<AuthorStatistics>,
}

/// Books grouped under one exact author string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStatistics {
    pub author: String,
    pub count: usize,
    pub read_count: usize,
}

impl LibraryStatistics {
    /// Statistics of a catalog with no books
    pub fn empty(no_data_label: &str) -> Self {
        Self {
            total: 0,
            read: 0,
            unread: 0,
            percentage: 0,
            authors_count: 0,
            popular_author: no_data_label.to_string(),
            books_per_author: 0.0,
            authors: Vec::new(),
        }
    }

    /// `books_per_author` with exactly one decimal, e.g. "1.5"
    pub fn books_per_author_display(&self) -> String {
        format!("{:.1}", self.books_per_author)
    }
}
