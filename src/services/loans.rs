//! Loan management service

use crate::{
    error::AppResult,
    models::loan::{LoanDetails, LoanRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book for a user
    pub async fn borrow_book(&self, request: &LoanRequest) -> AppResult<LoanDetails> {
        self.repository
            .loans
            .borrow(&request.title, request.user_id)
            .await
    }

    /// Extend the open loan for a (book, user) pair
    pub async fn extend_loan(&self, request: &LoanRequest) -> AppResult<LoanDetails> {
        self.repository
            .loans
            .extend(&request.title, request.user_id)
            .await
    }

    /// Return a borrowed book
    pub async fn return_book(&self, request: &LoanRequest) -> AppResult<LoanDetails> {
        self.repository
            .loans
            .close(&request.title, request.user_id)
            .await
    }
}
