//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor},
        book::{Book, CreateBook},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List authors with pagination
    pub async fn list_authors(&self, skip: i64, limit: i64) -> AppResult<Vec<Author>> {
        self.repository.authors.list(skip, limit).await
    }

    /// Get author by ID
    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.repository
            .authors
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }

    /// Create a new author.
    /// Names are unique across the catalog; a taken name is rejected
    /// before the insert.
    pub async fn create_author(&self, author: &CreateAuthor) -> AppResult<Author> {
        if self
            .repository
            .authors
            .get_by_name(&author.name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Such name for Author already exists".to_string(),
            ));
        }
        self.repository.authors.create(author).await
    }

    /// List books with pagination and an optional author filter
    pub async fn list_books(
        &self,
        skip: i64,
        limit: i64,
        author_id: Option<i32>,
    ) -> AppResult<Vec<Book>> {
        self.repository.books.list(skip, limit, author_id).await
    }

    /// Create a book under the given author.
    /// The author must exist; nothing is written when it does not.
    pub async fn create_book(&self, author_id: i32, book: &CreateBook) -> AppResult<Book> {
        self.get_author(author_id).await?;
        self.repository.books.create(author_id, book).await
    }

    /// Storage connectivity probe used by the readiness endpoint
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
