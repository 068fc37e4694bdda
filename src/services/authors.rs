//! Author management service

use crate::{
    error::AppResult,
    models::{
        author::{Author, NewAuthor},
        book::BookSummaryRow,
    },
    repository::Repository,
};

/// Outcome of an author delete request. Deletion is blocked while books
/// still reference the author; the check and the delete are separate
/// queries, so the block is advisory rather than atomic.
pub enum AuthorDelete {
    Deleted,
    HasBooks(Author, Vec<BookSummaryRow>),
}

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// Author with their books, for the detail page
    pub async fn detail(&self, id: i32) -> AppResult<(Author, Vec<BookSummaryRow>)> {
        let author = self.repository.authors.get(id).await?;
        let books = self.repository.books.by_author(id).await?;
        Ok((author, books))
    }

    pub async fn get(&self, id: i32) -> AppResult<Author> {
        self.repository.authors.get(id).await
    }

    pub async fn create(&self, author: &NewAuthor) -> AppResult<Author> {
        let created = self.repository.authors.create(author).await?;
        tracing::info!("Created author id={} ({})", created.id, created.name());
        Ok(created)
    }

    pub async fn update(&self, id: i32, author: &NewAuthor) -> AppResult<Author> {
        self.repository.authors.update(id, author).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<AuthorDelete> {
        let author = self.repository.authors.get(id).await?;
        let books = self.repository.books.by_author(id).await?;

        if !books.is_empty() {
            return Ok(AuthorDelete::HasBooks(author, books));
        }

        self.repository.authors.delete(id).await?;
        tracing::info!("Deleted author id={}", id);
        Ok(AuthorDelete::Deleted)
    }
}
