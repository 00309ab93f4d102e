use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog-assigned identity of a book
pub type BookId = u64;

/// A single entry of the personal collection
/// Books are only ever created by the catalog, which owns identity assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Immutable identifier, never reused within a catalog session
    pub id: BookId,

    /// Trimmed, non-empty title
    pub title: String,

    /// Trimmed, non-empty author name
    pub author: String,

    /// Publication year, 0..=current year
    pub year: i32,

    pub is_read: bool,

    /// Day the book entered the catalog
    pub added_date: NaiveDate,

    /// Present only while `is_read` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_date: Option<NaiveDate>,
}

/// The editable fields of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
    Year,
}

impl Book {
    /// Create an unread book
    /// Values MUST already be validated and trimmed (checked by caller)
    pub(crate) fn new(
        id: BookId,
        title: String,
        author: String,
        year: i32,
        added_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title,
            author,
            year,
            is_read: false,
            added_date,
            read_date: None,
        }
    }

    pub(crate) fn mark_read(&mut self, on: NaiveDate) {
        self.is_read = true;
        self.read_date = Some(on);
    }

    pub(crate) fn mark_unread(&mut self) {
        self.is_read = false;
        self.read_date = None;
    }

    /// Apply already-validated field values
    /// `None` leaves the field unchanged
    pub(crate) fn apply_fields(
        &mut self,
        title: Option<String>,
        author: Option<String>,
        year: Option<i32>,
    ) {
        if let Some(t) = title {
            self.title = t;
        }
        if let Some(a) = author {
            self.author = a;
        }
        if let Some(y) = year {
            self.year = y;
        }
    }
}

impl BookField {
    /// Every field accepted by an update, in validation order
    pub const ALL: [BookField; 3] = [BookField::Title, BookField::Author, BookField::Year];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Year => "year",
        }
    }

    /// Human-readable constraint, used as the validation message
    pub fn constraint(&self) -> &'static str {
        match self {
            BookField::Title => "Book title is required and must be a non-empty string",
            BookField::Author => "Book author is required and must be a non-empty string",
            BookField::Year => {
                "Publication year must be a non-negative integer not greater than the current year"
            }
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

impl std::fmt::Display for BookField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book::new(
            1,
            "Dune".to_string(),
            "Frank Herbert".to_string(),
            1965,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_book_is_unread() {
        let book = sample();
        assert!(!book.is_read);
        assert_eq!(book.read_date, None);
    }

    #[test]
    fn test_read_date_follows_read_flag() {
        let mut book = sample();
        let day = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();

        book.mark_read(day);
        assert!(book.is_read);
        assert_eq!(book.read_date, Some(day));

        book.mark_unread();
        assert!(!book.is_read);
        assert_eq!(book.read_date, None);
    }

    #[test]
    fn test_serializes_camel_case_without_read_date() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["isRead"], false);
        assert_eq!(json["addedDate"], "2024-03-01");
        assert!(json.get("readDate").is_none());
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(BookField::from_key("year"), Some(BookField::Year));
        assert_eq!(BookField::from_key("isbn"), None);
        assert_eq!(BookField::Title.to_string(), "title");
    }
}
