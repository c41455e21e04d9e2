//! eLibrary Server
//!
//! A REST JSON API for managing a library's books, users, and loans:
//! creating books and users, looking up a book, and borrowing, extending
//! and returning loans with available-copy bookkeeping.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
