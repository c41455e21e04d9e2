//! Loan management endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{LoanProjection, LoanRequest},
};

use super::validate_request;

/// Loan response with status message
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    /// Status message
    pub message: String,
    /// Loan details
    pub loan: LoanProjection,
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Book borrowed", body = LoanResponse),
        (status = 400, description = "Invalid input, or book/user not found"),
        (status = 409, description = "An open loan already exists for this book and user")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<Json<LoanResponse>> {
    validate_request(&request)?;

    let loan = state.services.loans.borrow_book(&request).await?;

    Ok(Json(LoanResponse {
        message: "book borrowed successfully".to_string(),
        loan: loan.into(),
    }))
}

/// Extend an open loan
#[utoipa::path(
    post,
    path = "/extend",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Loan extended", body = LoanResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "No open loan for this book and user")
    )
)]
pub async fn extend_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<Json<LoanResponse>> {
    validate_request(&request)?;

    let loan = state.services.loans.extend_loan(&request).await?;

    Ok(Json(LoanResponse {
        message: "loan extended successfully".to_string(),
        loan: loan.into(),
    }))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/return",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Book returned", body = LoanResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "No open loan for this book and user")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<Json<LoanResponse>> {
    validate_request(&request)?;

    let loan = state.services.loans.return_book(&request).await?;

    Ok(Json(LoanResponse {
        message: "book returned successfully".to_string(),
        loan: loan.into(),
    }))
}
