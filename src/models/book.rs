//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub summary: String,
    pub isbn: String,
}

impl Book {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

/// Book list row with the author name resolved, for the book list page
#[derive(Debug, Clone, FromRow)]
pub struct BookListRow {
    pub id: i32,
    pub title: String,
    pub author_name: String,
}

impl BookListRow {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

/// Title and summary only, for dependent-book listings on author and genre
/// pages
#[derive(Debug, Clone, FromRow)]
pub struct BookSummaryRow {
    pub id: i32,
    pub title: String,
    pub summary: String,
}

impl BookSummaryRow {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

/// Validated book fields ready to persist
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author_id: i32,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<i32>,
}

/// Raw book form submission. `author` is the raw select value and `genre`
/// collects every checked checkbox (hence `axum_extra::extract::Form`).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct BookForm {
    #[validate(length(min = 1, message = "Title must not be empty."))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty."))]
    pub author: String,
    #[validate(length(min = 1, message = "Summary must not be empty."))]
    pub summary: String,
    #[validate(length(min = 1, message = "ISBN must not be empty."))]
    pub isbn: String,
    pub genre: Vec<i32>,
}

impl BookForm {
    /// Copy with surrounding whitespace removed. Validation runs on the
    /// trimmed values, so whitespace-only input fails the required checks.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            summary: self.summary.trim().to_string(),
            isbn: self.isbn.trim().to_string(),
            genre: self.genre.clone(),
        }
    }

    pub fn from_book(book: &Book, genre_ids: &[i32]) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author_id.to_string(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
            genre: genre_ids.to_vec(),
        }
    }
}
