//! Book instance (copy) management service

use crate::{
    error::AppResult,
    models::{
        book::BookListRow,
        book_instance::{BookInstance, NewBookInstance},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookInstancesService {
    repository: Repository,
}

impl BookInstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BookInstance>> {
        self.repository.book_instances.list().await
    }

    pub async fn detail(&self, id: i32) -> AppResult<BookInstance> {
        self.repository.book_instances.get(id).await
    }

    /// Books selectable on the copy form
    pub async fn form_books(&self) -> AppResult<Vec<BookListRow>> {
        self.repository.books.list().await
    }

    pub async fn create(&self, instance: &NewBookInstance) -> AppResult<BookInstance> {
        let created = self.repository.book_instances.create(instance).await?;
        tracing::info!(
            "Created book instance id={} for book id={}",
            created.id,
            created.book_id
        );
        Ok(created)
    }

    pub async fn update(&self, id: i32, instance: &NewBookInstance) -> AppResult<BookInstance> {
        self.repository.book_instances.update(id, instance).await
    }

    /// Copies have no dependents; deletion is unconditional
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.book_instances.get(id).await?;
        self.repository.book_instances.delete(id).await?;
        tracing::info!("Deleted book instance id={}", id);
        Ok(())
    }
}
