pub mod entity;
pub mod invariants;
pub mod update;

pub use entity::{Book, BookField, BookId};
pub use invariants::{validate_author, validate_book, validate_title, validate_year};
pub use update::BookUpdate;
