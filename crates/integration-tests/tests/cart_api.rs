//! Integration tests for the cart API.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The cart API server running (cargo run -p mashauri-cart-api)
//!
//! They mutate the single shared cart document, so run them against a
//! scratch database.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the cart API (configurable via environment).
fn cart_api_base_url() -> String {
    std::env::var("CART_API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Fetch the current cart as JSON.
async fn get_cart(client: &Client) -> Value {
    let resp = client
        .get(format!("{}/api/cart", cart_api_base_url()))
        .send()
        .await
        .expect("Failed to get cart");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse cart response")
}

/// Replace the cart with the given items.
async fn post_cart(client: &Client, cart: Value) -> Value {
    let resp = client
        .post(format!("{}/api/cart", cart_api_base_url()))
        .json(&json!({ "cart": cart }))
        .send()
        .await
        .expect("Failed to post cart");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse save response")
}

/// Delete the cart.
async fn delete_cart(client: &Client) -> Value {
    let resp = client
        .delete(format!("{}/api/cart", cart_api_base_url()))
        .send()
        .await
        .expect("Failed to delete cart");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse delete response")
}

#[tokio::test]
#[ignore = "Requires running cart API and PostgreSQL"]
async fn test_health() {
    let resp = Client::new()
        .get(format!("{}/health", cart_api_base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running cart API and PostgreSQL"]
async fn test_empty_cart_round_trip() {
    let client = Client::new();

    let saved = post_cart(&client, json!([])).await;
    assert_eq!(saved["message"], "Cart saved successfully");

    let body = get_cart(&client).await;
    assert_eq!(body, json!({ "cart": [] }));
}

#[tokio::test]
#[ignore = "Requires running cart API and PostgreSQL"]
async fn test_replace_is_wholesale() {
    let client = Client::new();

    let two_items = json!([
        { "productId": 1, "name": "Product A", "price": 100 },
        { "productId": 2, "name": "Product B", "price": 150 }
    ]);
    post_cart(&client, two_items).await;

    let body = get_cart(&client).await;
    let cart = body["cart"].as_array().expect("cart is an array");
    assert_eq!(cart.len(), 2);
    assert_eq!(cart[0]["productId"], 1);
    assert_eq!(cart[1]["productId"], 2);

    // A second save replaces the document instead of appending to it.
    post_cart(&client, json!([{ "productId": 2, "name": "Product B", "price": 150 }])).await;

    let body = get_cart(&client).await;
    let cart = body["cart"].as_array().expect("cart is an array");
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0]["productId"], 2);
}

#[tokio::test]
#[ignore = "Requires running cart API and PostgreSQL"]
async fn test_duplicate_entries_survive_round_trip() {
    let client = Client::new();

    let duplicates = json!([
        { "productId": 1, "name": "Product A", "price": 100 },
        { "productId": 1, "name": "Product A", "price": 100 }
    ]);
    post_cart(&client, duplicates).await;

    let body = get_cart(&client).await;
    assert_eq!(body["cart"].as_array().expect("cart is an array").len(), 2);
}

#[tokio::test]
#[ignore = "Requires running cart API and PostgreSQL"]
async fn test_clear_is_idempotent() {
    let client = Client::new();

    // Clear regardless of what is in the cart, then clear again with no
    // cart present: both must succeed and reads must come back empty.
    let cleared = delete_cart(&client).await;
    assert_eq!(cleared["message"], "Cart cleared");

    let cleared_again = delete_cart(&client).await;
    assert_eq!(cleared_again["message"], "Cart cleared");

    let body = get_cart(&client).await;
    assert_eq!(body, json!({ "cart": [] }));
}
