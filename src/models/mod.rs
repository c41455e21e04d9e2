//! Data models for the eLibrary server

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookProjection, CreateBook};
pub use loan::{LoanDetails, LoanProjection, LoanRequest};
pub use user::{CreateUser, User, UserProjection};
