//! Author endpoints

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use super::{Json, Path, Query};
use crate::{
    error::AppResult,
    models::{
        author::{Author, AuthorQuery, CreateAuthor},
        book::{Book, CreateBook},
    },
};

/// List authors with pagination
#[utoipa::path(
    get,
    path = "/authors/",
    tag = "authors",
    params(AuthorQuery),
    responses(
        (status = 200, description = "List of authors", body = Vec<Author>),
        (status = 400, description = "Malformed pagination parameters")
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    Query(query): Query<AuthorQuery>,
) -> AppResult<Json<Vec<Author>>> {
    query.validate()?;

    let authors = state
        .services
        .catalog
        .list_authors(query.skip.unwrap_or(0), query.limit.unwrap_or(5))
        .await?;
    Ok(Json(authors))
}

/// Get author details by ID
#[utoipa::path(
    get,
    path = "/authors/{author_id}/",
    tag = "authors",
    params(
        ("author_id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(author_id): Path<i32>,
) -> AppResult<Json<Author>> {
    let author = state.services.catalog.get_author(author_id).await?;
    Ok(Json(author))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors/",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Author name already taken")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(author): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let created = state.services.catalog.create_author(&author).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Create a new book under an author.
/// The path parameter names the owning author; the body carries only
/// the book fields.
#[utoipa::path(
    post,
    path = "/authors/{author_id}/",
    tag = "authors",
    params(
        ("author_id" = i32, Path, description = "Owning author ID")
    ),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 404, description = "Author not found")
    )
)]
pub async fn create_book_for_author(
    State(state): State<crate::AppState>,
    Path(author_id): Path<i32>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.create_book(author_id, &book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
