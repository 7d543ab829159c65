//! Data models for Bookshelf

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::{Author, CreateAuthor};
pub use book::{Book, CreateBook};
