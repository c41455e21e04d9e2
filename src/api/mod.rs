//! API handlers for eLibrary REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod users;

use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run struct-level validation on a decoded request body
pub(crate) fn validate_request<T: Validate>(request: &T) -> AppResult<()> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
