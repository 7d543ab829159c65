//! Book endpoints

use axum::extract::State;
use validator::Validate;

use super::{Json, Query};
use crate::{
    error::AppResult,
    models::book::{Book, BookQuery},
};

/// List books with pagination and an optional author filter
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>),
        (status = 400, description = "Missing or malformed pagination parameters")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    query.validate()?;

    let books = state
        .services
        .catalog
        .list_books(query.skip, query.limit, query.author_id)
        .await?;
    Ok(Json(books))
}
