//! Catalog overview service for the home page

use crate::{error::AppResult, repository::Repository};

/// Entity counts shown on the home page
#[derive(Debug, Clone, Copy)]
pub struct CatalogSummary {
    pub book_count: i64,
    pub book_instance_count: i64,
    pub book_instance_available_count: i64,
    pub author_count: i64,
    pub genre_count: i64,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Count every entity kind for the home page
    pub async fn summary(&self) -> AppResult<CatalogSummary> {
        Ok(CatalogSummary {
            book_count: self.repository.books.count().await?,
            book_instance_count: self.repository.book_instances.count().await?,
            book_instance_available_count: self
                .repository
                .book_instances
                .count_available()
                .await?,
            author_count: self.repository.authors.count().await?,
            genre_count: self.repository.genres.count().await?,
        })
    }
}
