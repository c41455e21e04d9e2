//! Book model and related types

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Permitted character set for book titles: letters, digits, whitespace
/// and a small amount of punctuation.
pub static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[a-zA-Z0-9\s.,'":;!?-]+$"#).expect("invalid title pattern"));

/// Check a title against the permitted character set
pub fn is_valid_title(title: &str) -> bool {
    TITLE_PATTERN.is_match(title)
}

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available_copies: i32,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(regex(path = *TITLE_PATTERN, message = "invalid book title provided"))]
    pub title: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "isbn is required"))]
    pub isbn: String,
    #[validate(range(min = 0, message = "available_copies must be non-negative"))]
    pub available_copies: i32,
}

/// Public projection of a book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookProjection {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available_copies: i32,
}

impl From<Book> for BookProjection {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            available_copies: book.available_copies,
        }
    }
}
