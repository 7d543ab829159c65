//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Stored author record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub bio: String,
}

/// Create author request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthor {
    /// Author name, unique across the catalog
    pub name: String,
    pub bio: String,
}

/// Pagination parameters for the author listing.
/// Both fields are optional here; the book listing requires its own.
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct AuthorQuery {
    /// Records to skip from the start of the listing (default 0)
    #[validate(range(min = 0, message = "skip must be greater than or equal to 0"))]
    pub skip: Option<i64>,
    /// Maximum records to return (default 5)
    #[validate(range(min = 1, message = "limit must be greater than 0"))]
    pub limit: Option<i64>,
}
