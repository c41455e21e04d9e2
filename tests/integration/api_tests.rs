//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/elibrary/v1";

/// Unique suffix so repeated runs don't collide on the title uniqueness constraint
fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

async fn create_book(client: &Client, title: &str, copies: i32) -> Value {
    let response = client
        .post(format!("{}/create-book", BASE_URL))
        .json(&json!({
            "title": title,
            "author": "Frank Herbert",
            "isbn": "9780441172719",
            "available_copies": copies
        }))
        .send()
        .await
        .expect("Failed to send create-book request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse create-book response")
}

async fn create_user(client: &Client) -> i32 {
    let suffix = unique_suffix();
    let response = client
        .post(format!("{}/create-user", BASE_URL))
        .json(&json!({
            "first_name": "Paul",
            "last_name": "Atreides",
            "username": format!("muaddib{}", suffix),
            "email": format!("paul{}@arrakis.example", suffix)
        }))
        .send()
        .await
        .expect("Failed to send create-user request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse create-user response");
    body["user"]["id"].as_i64().expect("user id missing") as i32
}

async fn get_book(client: &Client, title: &str) -> reqwest::Response {
    client
        .get(format!("{}/book/{}", BASE_URL, title))
        .send()
        .await
        .expect("Failed to send get-book request")
}

async fn loan_op(client: &Client, op: &str, title: &str, user_id: i32) -> reqwest::Response {
    client
        .post(format!("{}/{}", BASE_URL, op))
        .json(&json!({ "title": title, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to send loan request")
}

async fn available_copies(client: &Client, title: &str) -> i64 {
    let body: Value = get_book(client, title)
        .await
        .json()
        .await
        .expect("Failed to parse get-book response");
    body["book"]["available_copies"].as_i64().expect("missing copy count")
}

fn parse_date(value: &Value) -> DateTime<Utc> {
    value
        .as_str()
        .expect("missing date")
        .parse()
        .expect("unparseable date")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_get_missing_book_is_404() {
    let client = Client::new();

    let response = get_book(&client, "No Such Title 424242").await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_get_book_with_invalid_title_is_400() {
    let client = Client::new();

    let response = get_book(&client, "bad%25title").await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_book_round_trip() {
    let client = Client::new();
    let title = format!("Dune {}", unique_suffix());

    let created = create_book(&client, &title, 3).await;
    assert_eq!(created["book"]["title"], title.as_str());
    assert_eq!(created["book"]["available_copies"], 3);

    let response = get_book(&client, &title).await;
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"], created["book"]);
}

#[tokio::test]
#[ignore]
async fn test_create_user_rejects_bad_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/create-user", BASE_URL))
        .json(&json!({
            "first_name": "Paul",
            "last_name": "Atreides",
            "username": "muaddib",
            "email": "not-an-email"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_borrow_missing_book_is_rejected() {
    let client = Client::new();
    let user_id = create_user(&client).await;

    let response = loan_op(&client, "borrow", "No Such Title 424242", user_id).await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "book not found");
}

#[tokio::test]
#[ignore]
async fn test_borrow_with_unknown_user_is_rejected() {
    let client = Client::new();
    let title = format!("Children of Dune {}", unique_suffix());
    create_book(&client, &title, 1).await;

    let response = loan_op(&client, "borrow", &title, 999_999_999).await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "user not found");
    // No copy was taken
    assert_eq!(available_copies(&client, &title).await, 1);
}

#[tokio::test]
#[ignore]
async fn test_borrow_decrements_copies_and_sets_due_date() {
    let client = Client::new();
    let title = format!("Dune Messiah {}", unique_suffix());
    create_book(&client, &title, 2).await;
    let user_id = create_user(&client).await;

    let response = loan_op(&client, "borrow", &title, user_id).await;
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["loan"]["title"], title.as_str());

    let loan_date = parse_date(&body["loan"]["loan_date"]);
    let return_date = parse_date(&body["loan"]["return_date"]);
    assert_eq!(return_date - loan_date, Duration::days(28));

    assert_eq!(available_copies(&client, &title).await, 1);
}

#[tokio::test]
#[ignore]
async fn test_double_borrow_conflicts_without_second_decrement() {
    let client = Client::new();
    let title = format!("Heretics of Dune {}", unique_suffix());
    create_book(&client, &title, 2).await;
    let user_id = create_user(&client).await;

    let first = loan_op(&client, "borrow", &title, user_id).await;
    assert!(first.status().is_success());

    let second = loan_op(&client, "borrow", &title, user_id).await;
    assert_eq!(second.status(), 409);

    let body: Value = second.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "loan already exists");

    // Only the first borrow took a copy
    assert_eq!(available_copies(&client, &title).await, 1);
}

#[tokio::test]
#[ignore]
async fn test_borrow_with_zero_copies_is_rejected() {
    let client = Client::new();
    let title = format!("Chapterhouse {}", unique_suffix());
    create_book(&client, &title, 0).await;
    let user_id = create_user(&client).await;

    let response = loan_op(&client, "borrow", &title, user_id).await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "book not found");
}

#[tokio::test]
#[ignore]
async fn test_extend_adds_21_days() {
    let client = Client::new();
    let title = format!("God Emperor {}", unique_suffix());
    create_book(&client, &title, 1).await;
    let user_id = create_user(&client).await;

    let borrowed: Value = loan_op(&client, "borrow", &title, user_id)
        .await
        .json()
        .await
        .expect("Failed to parse borrow response");
    let original_due = parse_date(&borrowed["loan"]["return_date"]);

    let response = loan_op(&client, "extend", &title, user_id).await;
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let new_due = parse_date(&body["loan"]["return_date"]);
    assert_eq!(new_due - original_due, Duration::days(21));

    // Extending does not touch the copy counter
    assert_eq!(available_copies(&client, &title).await, 0);
}

#[tokio::test]
#[ignore]
async fn test_extend_without_loan_is_404() {
    let client = Client::new();
    let title = format!("The Dosadi Experiment {}", unique_suffix());
    create_book(&client, &title, 1).await;
    let user_id = create_user(&client).await;

    let response = loan_op(&client, "extend", &title, user_id).await;
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "loan not found");
}

#[tokio::test]
#[ignore]
async fn test_return_restores_copy_and_closes_loan() {
    let client = Client::new();
    let title = format!("Whipping Star {}", unique_suffix());
    create_book(&client, &title, 1).await;
    let user_id = create_user(&client).await;

    let borrowed = loan_op(&client, "borrow", &title, user_id).await;
    assert!(borrowed.status().is_success());
    assert_eq!(available_copies(&client, &title).await, 0);

    let returned = loan_op(&client, "return", &title, user_id).await;
    assert!(returned.status().is_success());
    assert_eq!(available_copies(&client, &title).await, 1);

    // The loan is closed; a second return finds nothing open
    let again = loan_op(&client, "return", &title, user_id).await;
    assert_eq!(again.status(), 404);

    // And the same pair can borrow again
    let reborrow = loan_op(&client, "borrow", &title, user_id).await;
    assert!(reborrow.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_concurrent_borrows_never_overdraw() {
    let client = Client::new();
    let title = format!("Santaroga Barrier {}", unique_suffix());
    create_book(&client, &title, 3).await;

    let mut users = Vec::new();
    for _ in 0..8 {
        users.push(create_user(&client).await);
    }

    let mut handles = Vec::new();
    for user_id in users {
        let client = client.clone();
        let title = title.clone();
        handles.push(tokio::spawn(async move {
            loan_op(&client, "borrow", &title, user_id).await.status()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        let status = handle.await.expect("borrow task panicked");
        if status.is_success() {
            successes += 1;
        } else {
            assert_eq!(status, 400);
        }
    }

    // Exactly one successful borrow per available copy
    assert_eq!(successes, 3);
    assert_eq!(available_copies(&client, &title).await, 0);
}
