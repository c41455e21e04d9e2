//! Loans repository for database operations
//!
//! Borrow and return touch both the loans table and the book's copy counter,
//! so each runs inside one transaction with the affected rows locked. Two
//! concurrent borrows of the last copy serialize on the book row; the loser
//! observes `available_copies = 0` and gets no loan.

use chrono::{Duration, Utc};
use sqlx::{Pool, Postgres, Transaction};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        loan::{LoanDetails, EXTENSION_DAYS, LOAN_DURATION_DAYS},
        user::User,
    },
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Borrow a book: decrement its copy counter and create an open loan
    pub async fn borrow(&self, title: &str, user_id: i32) -> AppResult<LoanDetails> {
        let mut tx = self.pool.begin().await?;

        // Lock the book row so concurrent borrows serialize on the counter.
        // A title with zero copies left is indistinguishable from a missing one.
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, isbn, available_copies
            FROM books
            WHERE title = $1 AND available_copies > 0
            FOR UPDATE
            "#,
        )
        .bind(title)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::BookNotFound)?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, username, email FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::UserNotFound)?;

        let open_loan: Option<i32> = sqlx::query_scalar(
            "SELECT id FROM loans WHERE book_id = $1 AND user_id = $2 AND is_returned = FALSE",
        )
        .bind(book.id)
        .bind(user.id)
        .fetch_optional(&mut *tx)
        .await?;

        if open_loan.is_some() {
            return Err(AppError::LoanAlreadyExists);
        }

        sqlx::query("UPDATE books SET available_copies = available_copies - 1 WHERE id = $1")
            .bind(book.id)
            .execute(&mut *tx)
            .await?;

        let loan_date = Utc::now();
        let return_date = loan_date + Duration::days(LOAN_DURATION_DAYS);
        let borrower_name = user.display_name();

        let loan_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO loans (book_id, user_id, borrower_name, loan_date, return_date, is_returned)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING id
            "#,
        )
        .bind(book.id)
        .bind(user.id)
        .bind(&borrower_name)
        .bind(loan_date)
        .bind(return_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(LoanDetails {
            id: loan_id,
            book_id: book.id,
            user_id: user.id,
            borrower_name,
            loan_date,
            return_date,
            is_returned: false,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
        })
    }

    /// Extend the open loan for a (title, user) pair by the extension period
    pub async fn extend(&self, title: &str, user_id: i32) -> AppResult<LoanDetails> {
        let mut tx = self.pool.begin().await?;

        let loan = find_open_loan(&mut tx, title, user_id)
            .await?
            .ok_or(AppError::NoLoanFound)?;

        let new_return_date = loan.return_date + Duration::days(EXTENSION_DAYS);

        sqlx::query("UPDATE loans SET return_date = $1 WHERE id = $2")
            .bind(new_return_date)
            .bind(loan.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(LoanDetails {
            return_date: new_return_date,
            ..loan
        })
    }

    /// Close the open loan for a (title, user) pair and restore the book's copy
    pub async fn close(&self, title: &str, user_id: i32) -> AppResult<LoanDetails> {
        let mut tx = self.pool.begin().await?;

        let loan = find_open_loan(&mut tx, title, user_id)
            .await?
            .ok_or(AppError::NoLoanFound)?;

        sqlx::query("UPDATE loans SET is_returned = TRUE WHERE id = $1")
            .bind(loan.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE books SET available_copies = available_copies + 1 WHERE id = $1")
            .bind(loan.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(LoanDetails {
            is_returned: true,
            ..loan
        })
    }
}

/// Locate the open loan for (title, user), locking the loan row for update
async fn find_open_loan(
    tx: &mut Transaction<'_, Postgres>,
    title: &str,
    user_id: i32,
) -> AppResult<Option<LoanDetails>> {
    let loan = sqlx::query_as::<_, LoanDetails>(
        r#"
        SELECT l.id, l.book_id, l.user_id, l.borrower_name, l.loan_date, l.return_date,
               l.is_returned, b.title, b.author, b.isbn
        FROM loans l
        JOIN books b ON b.id = l.book_id
        WHERE b.title = $1 AND l.user_id = $2 AND l.is_returned = FALSE
        FOR UPDATE OF l
        "#,
    )
    .bind(title)
    .bind(user_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(loan)
}
