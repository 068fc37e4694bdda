//! Genre management service

use crate::{
    error::AppResult,
    models::{book::BookSummaryRow, genre::Genre},
    repository::Repository,
};

/// Outcome of a genre create request. A genre whose normalized name already
/// exists is not inserted again; the caller redirects to the existing one.
pub enum GenreCreate {
    Created(Genre),
    AlreadyExists(Genre),
}

/// Outcome of a genre delete request; blocked while books reference it
pub enum GenreDelete {
    Deleted,
    HasBooks(Genre, Vec<BookSummaryRow>),
}

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    /// Genre with the books carrying it, for the detail page
    pub async fn detail(&self, id: i32) -> AppResult<(Genre, Vec<BookSummaryRow>)> {
        let genre = self.repository.genres.get(id).await?;
        let books = self.repository.books.by_genre(id).await?;
        Ok((genre, books))
    }

    pub async fn get(&self, id: i32) -> AppResult<Genre> {
        self.repository.genres.get(id).await
    }

    /// Lookup-before-insert: an existing genre with the same normalized name
    /// wins over creating a duplicate.
    pub async fn create(&self, name: &str) -> AppResult<GenreCreate> {
        if let Some(existing) = self.repository.genres.find_by_name(name).await? {
            tracing::debug!("Genre '{}' already exists as id={}", name, existing.id);
            return Ok(GenreCreate::AlreadyExists(existing));
        }

        let created = self.repository.genres.create(name).await?;
        tracing::info!("Created genre id={} ({})", created.id, created.name);
        Ok(GenreCreate::Created(created))
    }

    pub async fn update(&self, id: i32, name: &str) -> AppResult<Genre> {
        self.repository.genres.update(id, name).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<GenreDelete> {
        let genre = self.repository.genres.get(id).await?;
        let books = self.repository.books.by_genre(id).await?;

        if !books.is_empty() {
            return Ok(GenreDelete::HasBooks(genre, books));
        }

        self.repository.genres.delete(id).await?;
        tracing::info!("Deleted genre id={}", id);
        Ok(GenreDelete::Deleted)
    }
}
