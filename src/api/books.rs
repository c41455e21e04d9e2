//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{is_valid_title, BookProjection, CreateBook},
};

use super::validate_request;

/// Book response with status message
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    /// Status message
    pub message: String,
    /// Book details
    pub book: BookProjection,
}

/// Get a book by its title
#[utoipa::path(
    get,
    path = "/book/{title}",
    tag = "books",
    params(
        ("title" = String, Path, description = "Book title")
    ),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 400, description = "Invalid title"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<BookResponse>> {
    if !is_valid_title(&title) {
        return Err(AppError::Validation("invalid book title provided".to_string()));
    }

    let book = state.services.catalog.get_book(&title).await?;

    Ok(Json(BookResponse {
        message: "book found".to_string(),
        book: book.into(),
    }))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/create-book",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Duplicate title or database failure")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBook>,
) -> AppResult<Json<BookResponse>> {
    validate_request(&request)?;

    let book = state.services.catalog.create_book(request).await?;

    Ok(Json(BookResponse {
        message: "book created successfully".to_string(),
        book: book.into(),
    }))
}
