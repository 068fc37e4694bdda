//! Genres repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::genre::{normalized_name, Genre},
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All genres, sorted by name
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        let genres =
            sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(genres)
    }

    /// Get genre by ID
    pub async fn get(&self, id: i32) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))
    }

    /// Find a genre whose normalized name matches. Used by the
    /// lookup-before-insert duplicate check; there is no unique constraint
    /// backing it, so the comparison happens on the normalization key.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let key = normalized_name(name);
        let genres =
            sqlx::query_as::<_, Genre>("SELECT id, name FROM genres")
                .fetch_all(&self.pool)
                .await?;

        Ok(genres.into_iter().find(|g| normalized_name(&g.name) == key))
    }

    pub async fn create(&self, name: &str) -> AppResult<Genre> {
        let created =
            sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(created)
    }

    pub async fn update(&self, id: i32, name: &str) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
