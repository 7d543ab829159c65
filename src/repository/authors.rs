//! Authors repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List authors in insertion order with an offset/limit window.
    /// A window past the end of the table yields an empty list.
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, bio FROM authors ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;
        Ok(authors)
    }

    /// Get author by ID; absence is `None`, not an error
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let author =
            sqlx::query_as::<_, Author>("SELECT id, name, bio FROM authors WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(author)
    }

    /// Get author by exact name; used as the pre-creation uniqueness probe
    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        let author =
            sqlx::query_as::<_, Author>("SELECT id, name, bio FROM authors WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(author)
    }

    /// Create a new author
    pub async fn create(&self, author: &CreateAuthor) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "INSERT INTO authors (name, bio) VALUES ($1, $2) RETURNING id, name, bio",
        )
        .bind(&author.name)
        .bind(&author.bio)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // A racer that slipped past the name probe trips the unique
            // index; surface it as the same duplicate signal.
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("Such name for Author already exists".to_string())
            }
            other => AppError::Database(other),
        })
    }
}
