//! Loan model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::TITLE_PATTERN;

/// Number of days a new loan runs before it is due
pub const LOAN_DURATION_DAYS: i64 = 28;

/// Number of days an extension adds to the due date
pub const EXTENSION_DAYS: i64 = 21;

/// Loan joined with the referenced book, as read back for responses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LoanDetails {
    pub id: i32,
    pub book_id: i32,
    pub user_id: i32,
    pub borrower_name: String,
    pub loan_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub is_returned: bool,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Borrow/extend/return request: locates a (book, user) pair
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoanRequest {
    #[validate(regex(path = *TITLE_PATTERN, message = "invalid book title provided"))]
    pub title: String,
    #[validate(range(min = 1, message = "user_id is required"))]
    pub user_id: i32,
}

/// Public projection of a loan
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanProjection {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub loan_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
}

impl From<LoanDetails> for LoanProjection {
    fn from(loan: LoanDetails) -> Self {
        Self {
            title: loan.title,
            author: loan.author,
            isbn: loan.isbn,
            loan_date: loan.loan_date,
            return_date: loan.return_date,
        }
    }
}
