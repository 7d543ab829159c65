//! API integration tests
//!
//! These run against a live server with its database up:
//! `cargo run`, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8000";

/// Authors are never deleted, so every run needs names of its own
fn unique(name: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("System clock before epoch")
        .as_nanos();
    format!("{} {}", name, nanos)
}

async fn create_author(client: &Client, name: &str, bio: &str) -> Value {
    let response = client
        .post(format!("{}/authors/", BASE_URL))
        .json(&json!({"name": name, "bio": bio}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_root_greeting() {
    let client = Client::new();

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Hello World");
}

#[tokio::test]
#[ignore]
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
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_author() {
    let client = Client::new();
    let name = unique("Ada");

    let created = create_author(&client, &name, "pioneer").await;
    let author_id = created["id"].as_i64().expect("No author ID");
    assert_eq!(created["name"], name.as_str());
    assert_eq!(created["bio"], "pioneer");

    let response = client
        .get(format!("{}/authors/{}/", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, created);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_author_name_is_rejected() {
    let client = Client::new();
    let name = unique("Ada");

    let created = create_author(&client, &name, "pioneer").await;
    let created_id = created["id"].as_i64().expect("No author ID");

    // Same name again must not create a second record
    let response = client
        .post(format!("{}/authors/", BASE_URL))
        .json(&json!({"name": name, "bio": "someone else"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Such name for Author already exists");

    // The conflict left the catalog untouched: exactly one record bears
    // the name, and it is the one created first
    let response = client
        .get(format!("{}/authors/?skip=0&limit=1000000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let authors: Value = response.json().await.expect("Failed to parse response");
    let matching: Vec<&Value> = authors
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .filter(|a| a["name"] == name.as_str())
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["id"], created_id);
    assert_eq!(matching[0]["bio"], "pioneer");
}

#[tokio::test]
#[ignore]
async fn test_get_missing_author_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/authors/999999999/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Author not found");
}

#[tokio::test]
#[ignore]
async fn test_author_listing_window() {
    let client = Client::new();

    create_author(&client, &unique("First"), "bio").await;
    create_author(&client, &unique("Second"), "bio").await;

    let response = client
        .get(format!("{}/authors/?skip=0&limit=2", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let page: Value = response.json().await.expect("Failed to parse response");
    let page = page.as_array().expect("Expected a JSON array");
    assert!(page.len() <= 2);

    // Skipping one record shifts the window by exactly one
    let response = client
        .get(format!("{}/authors/?skip=1&limit=1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let shifted: Value = response.json().await.expect("Failed to parse response");
    let shifted = shifted.as_array().expect("Expected a JSON array");
    assert_eq!(shifted[0], page[1]);
}

#[tokio::test]
#[ignore]
async fn test_author_listing_defaults() {
    let client = Client::new();

    let response = client
        .get(format!("{}/authors/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    // Default window is the first five records
    assert!(body.as_array().expect("Expected a JSON array").len() <= 5);
}

#[tokio::test]
#[ignore]
async fn test_create_book_under_author() {
    let client = Client::new();

    let author = create_author(&client, &unique("Charles"), "novelist").await;
    let author_id = author["id"].as_i64().expect("No author ID");

    let response = client
        .post(format!("{}/authors/{}/", BASE_URL, author_id))
        .json(&json!({"title": "Notes", "summary": "s"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["title"], "Notes");
    assert_eq!(book["summary"], "s");
    assert_eq!(book["publication_date"], Value::Null);
    // The owning author comes from the path
    assert_eq!(book["author_id"], author_id);

    // The new book is visible through the filtered listing
    let response = client
        .get(format!(
            "{}/books/?skip=0&limit=100&author_id={}",
            BASE_URL, author_id
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let books: Value = response.json().await.expect("Failed to parse response");
    let books = books.as_array().expect("Expected a JSON array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], book["id"]);
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_publication_date() {
    let client = Client::new();

    let author = create_author(&client, &unique("Emily"), "poet").await;
    let author_id = author["id"].as_i64().expect("No author ID");

    let response = client
        .post(format!("{}/authors/{}/", BASE_URL, author_id))
        .json(&json!({
            "title": "Poems",
            "summary": "collected",
            "publication_date": "1890-11-12"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["publication_date"], "1890-11-12");
}

#[tokio::test]
#[ignore]
async fn test_create_book_under_missing_author() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors/999999999/", BASE_URL))
        .json(&json!({"title": "Orphan", "summary": "s"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Author not found");

    // Nothing was written
    let response = client
        .get(format!(
            "{}/books/?skip=0&limit=100&author_id=999999999",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    let books: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(books.as_array().expect("Expected a JSON array").len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_book_listing_requires_window() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_book_listing_without_filter_spans_authors() {
    let client = Client::new();

    let first = create_author(&client, &unique("Franz"), "bio").await;
    let second = create_author(&client, &unique("Milena"), "bio").await;

    for author in [&first, &second] {
        let author_id = author["id"].as_i64().expect("No author ID");
        let response = client
            .post(format!("{}/authors/{}/", BASE_URL, author_id))
            .json(&json!({"title": "Letters", "summary": "s"}))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 201);
    }

    // Unfiltered listing crosses author boundaries within one window
    let response = client
        .get(format!("{}/books/?skip=0&limit=1000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let books: Value = response.json().await.expect("Failed to parse response");
    let books = books.as_array().expect("Expected a JSON array");
    let authors_seen: Vec<i64> = books
        .iter()
        .filter_map(|b| b["author_id"].as_i64())
        .collect();
    assert!(authors_seen.contains(&first["id"].as_i64().unwrap()));
    assert!(authors_seen.contains(&second["id"].as_i64().unwrap()));
}

#[tokio::test]
#[ignore]
async fn test_book_filter_returns_only_matching_author() {
    let client = Client::new();

    let ours = create_author(&client, &unique("Jane"), "bio").await;
    let other = create_author(&client, &unique("Branwell"), "bio").await;
    let ours_id = ours["id"].as_i64().expect("No author ID");
    let other_id = other["id"].as_i64().expect("No author ID");

    for (author_id, title) in [(ours_id, "Persuasion"), (other_id, "Sketches")] {
        let response = client
            .post(format!("{}/authors/{}/", BASE_URL, author_id))
            .json(&json!({"title": title, "summary": "s"}))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 201);
    }

    let response = client
        .get(format!(
            "{}/books/?skip=0&limit=100&author_id={}",
            BASE_URL, ours_id
        ))
        .send()
        .await
        .expect("Failed to send request");

    let books: Value = response.json().await.expect("Failed to parse response");
    let books = books.as_array().expect("Expected a JSON array");
    assert!(!books.is_empty());
    assert!(books.iter().all(|b| b["author_id"] == ours_id));
}

#[tokio::test]
#[ignore]
async fn test_book_filter_author_zero_matches_nothing() {
    let client = Client::new();

    let author = create_author(&client, &unique("Nikolai"), "bio").await;
    let author_id = author["id"].as_i64().expect("No author ID");

    let response = client
        .post(format!("{}/authors/{}/", BASE_URL, author_id))
        .json(&json!({"title": "Overcoat", "summary": "s"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Zero is an ordinary filter value, not "no filter"; ids start at 1
    let response = client
        .get(format!("{}/books/?skip=0&limit=5&author_id=0", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let books: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(books.as_array().expect("Expected a JSON array").len(), 0);
}
