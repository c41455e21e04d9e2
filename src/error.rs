//! Error types for the eLibrary server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("A book with this title doesn't exist")]
    BookNotFound,

    #[error("A user with this id doesn't exist")]
    UserNotFound,

    #[error("A loan for this book already exists")]
    LoanAlreadyExists,

    #[error("There is no existing loan for this book")]
    NoLoanFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "validation failed",
                msg.clone(),
                None,
            ),
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "not found", msg.clone(), None)
            }
            AppError::BookNotFound => (
                StatusCode::BAD_REQUEST,
                "book not found",
                self.to_string(),
                None,
            ),
            AppError::UserNotFound => (
                StatusCode::BAD_REQUEST,
                "user not found",
                self.to_string(),
                None,
            ),
            AppError::LoanAlreadyExists => (
                StatusCode::CONFLICT,
                "loan already exists",
                self.to_string(),
                None,
            ),
            AppError::NoLoanFound => (
                StatusCode::NOT_FOUND,
                "loan not found",
                self.to_string(),
                None,
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "operation failed",
                    "Database error".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "operation failed",
                    "Internal server error".to_string(),
                    Some(msg.clone()),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
