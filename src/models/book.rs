//! Book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Stored book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub publication_date: Option<NaiveDate>,
    pub author_id: i32,
}

/// Create book request. The owning author comes from the request path,
/// not from the body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub summary: String,
    pub publication_date: Option<NaiveDate>,
}

/// Pagination and filter parameters for the book listing.
/// Unlike the author listing, `skip` and `limit` carry no defaults.
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct BookQuery {
    /// Records to skip from the start of the listing
    #[validate(range(min = 0, message = "skip must be greater than or equal to 0"))]
    pub skip: i64,
    /// Maximum records to return
    #[validate(range(min = 1, message = "limit must be greater than 0"))]
    pub limit: i64,
    /// Restrict the listing to books of a single author; absent means no filter
    pub author_id: Option<i32>,
}
