//! Books repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List books in insertion order with an offset/limit window,
    /// optionally restricted to a single author.
    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        author_id: Option<i32>,
    ) -> AppResult<Vec<Book>> {
        let books = match author_id {
            Some(author_id) => {
                sqlx::query_as::<_, Book>(
                    r#"
                    SELECT id, title, summary, publication_date, author_id
                    FROM books WHERE author_id = $1
                    ORDER BY id LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(author_id)
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Book>(
                    r#"
                    SELECT id, title, summary, publication_date, author_id
                    FROM books
                    ORDER BY id LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(books)
    }

    /// Get book by exact title. Titles are not unique; this returns the
    /// earliest match.
    pub async fn get_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, summary, publication_date, author_id
            FROM books WHERE title = $1
            ORDER BY id LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Create a new book owned by the given author
    pub async fn create(&self, author_id: i32, book: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, summary, publication_date, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, summary, publication_date, author_id
            "#,
        )
        .bind(&book.title)
        .bind(&book.summary)
        .bind(book.publication_date)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // The author existence probe runs first; the foreign key only
            // fires on out-of-band row removal.
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                AppError::NotFound("Author not found".to_string())
            }
            other => AppError::Database(other),
        })
    }
}
