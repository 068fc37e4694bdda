//! Data models for the Local Library

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

use chrono::NaiveDate;

// Re-export commonly used types
pub use author::{Author, AuthorForm, NewAuthor};
pub use book::{Book, BookForm, BookListRow, BookSummaryRow, NewBook};
pub use book_instance::{BookInstance, BookInstanceForm, CopyStatus, NewBookInstance};
pub use genre::{Genre, GenreForm};

/// Format a date the way detail pages display them, e.g. `Oct 6, 2014`.
/// Missing dates render as an empty string.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2014, 10, 6);
        assert_eq!(format_date(d), "Oct 6, 2014");
    }

    #[test]
    fn test_format_date_missing() {
        assert_eq!(format_date(None), "");
    }
}
