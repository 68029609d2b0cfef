//! Integration tests for the Vizygo Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use vizygo::app::RentalSession;
use vizygo::catalog::CatalogStore;
use vizygo::web::{create_router, AppState};

mod fixtures;
use fixtures::test_catalog;

/// Router over the built-in catalog.
fn seed_app() -> axum::Router {
    let store = CatalogStore::load_embedded().expect("Embedded catalog should load");
    let state = AppState::new(RentalSession::new(store)).expect("Failed to create app state");
    create_router(state)
}

/// Router over the fixture catalog, where listing 4 is already booked.
fn fixture_app() -> axum::Router {
    let store = CatalogStore::from_listings(test_catalog()).expect("Fixture catalog is valid");
    let state = AppState::new(RentalSession::new(store)).expect("Failed to create app state");
    create_router(state)
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Helper to make a PUT request with JSON body.
async fn put_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Helper to make a POST request with JSON body.
async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Helper to make an empty POST request.
async fn post(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn ids(json: &Value) -> Vec<u64> {
    json["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = seed_app();
    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

// ============================================================================
// Catalog and Filter Tests
// ============================================================================

#[tokio::test]
async fn test_get_catalog() {
    let app = seed_app();
    let (status, json) = get_json(&app, "/api/catalog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 8);
    assert_eq!(ids(&json), vec![2, 3, 4, 5, 6, 7, 8, 1]);
}

#[tokio::test]
async fn test_get_filters() {
    let app = seed_app();
    let (status, json) = get_json(&app, "/api/filters").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["categories"].as_array().unwrap().len(), 3);
    assert_eq!(json["locations"][0], "Indiranagar");
    assert_eq!(json["price_bands"][0]["key"], "budget");
}

#[tokio::test]
async fn test_list_listings_unfiltered() {
    let app = seed_app();
    let (status, json) = get_json(&app, "/api/listings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 8);
    assert_eq!(json["listings"][0]["selected_tier"], "daily");
    assert_eq!(json["listings"][0]["quote"]["price"], 150);
}

#[tokio::test]
async fn test_list_listings_with_filters() {
    let app = seed_app();

    let (_, budget) = get_json(&app, "/api/listings?price_band=budget").await;
    assert_eq!(ids(&budget), vec![7]);

    let (_, bikes) = get_json(&app, "/api/listings?category=bikes&location=all").await;
    assert_eq!(ids(&bikes), vec![2, 3, 4]);

    let (_, combined) =
        get_json(&app, "/api/listings?location=Koramangala&price_band=mid").await;
    assert_eq!(ids(&combined), vec![1]);
}

#[tokio::test]
async fn test_list_listings_unknown_band() {
    let app = seed_app();
    let (status, json) = get_json(&app, "/api/listings?price_band=luxury").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("luxury"));
}

#[tokio::test]
async fn test_get_listing_not_found() {
    let app = seed_app();
    let (status, json) = get_json(&app, "/api/listings/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "No listing with id 99");
}

// ============================================================================
// Tier Selection Tests
// ============================================================================

#[tokio::test]
async fn test_set_tier_is_per_listing() {
    let app = seed_app();

    let (status, json) = put_json(&app, "/api/listings/2/tier", json!({"tier": "monthly"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["selected_tier"], "monthly");
    assert_eq!(json["quote"]["price"], 100);
    assert_eq!(json["quote"]["distance_allowance_km"], 60);

    let (_, two) = get_json(&app, "/api/listings/2").await;
    assert_eq!(two["selected_tier"], "monthly");

    let (_, seven) = get_json(&app, "/api/listings/7").await;
    assert_eq!(seven["selected_tier"], "daily");
    assert_eq!(seven["quote"]["price"], 100);
}

#[tokio::test]
async fn test_set_invalid_tier() {
    let app = seed_app();
    let (status, json) = put_json(&app, "/api/listings/2/tier", json!({"tier": "yearly"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("yearly"));

    let (_, two) = get_json(&app, "/api/listings/2").await;
    assert_eq!(two["selected_tier"], "daily");
}

#[tokio::test]
async fn test_set_tier_unknown_listing() {
    let app = seed_app();
    let (status, _) = put_json(&app, "/api/listings/99/tier", json!({"tier": "weekly"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Booking Tests
// ============================================================================

#[tokio::test]
async fn test_book_listing_once() {
    let app = seed_app();

    let (status, json) = post(&app, "/api/listings/3/book").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 3);
    assert_eq!(json["available"], false);

    let (_, listing) = get_json(&app, "/api/listings/3").await;
    assert_eq!(listing["available"], false);

    let (status, json) = post(&app, "/api/listings/3/book").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Listing 3 is already booked");
}

#[tokio::test]
async fn test_book_already_booked_fixture_listing() {
    let app = fixture_app();
    let (status, _) = post(&app, "/api/listings/4/book").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = post(&app, "/api/listings/2/book").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_book_unknown_listing() {
    let app = seed_app();
    let (status, _) = post(&app, "/api/listings/404/book").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, catalog) = get_json(&app, "/api/catalog").await;
    assert!(catalog["listings"]
        .as_array()
        .unwrap()
        .iter()
        .all(|l| l["available"] == true));
}

// ============================================================================
// Story Tests
// ============================================================================

#[tokio::test]
async fn test_like_story_increments() {
    let app = seed_app();
    let (status, stories) = get_json(&app, "/api/stories").await;
    assert_eq!(status, StatusCode::OK);

    let first = &stories["stories"][0];
    let id = first["id"].as_u64().unwrap();
    let likes = first["likes"].as_u64().unwrap();

    let (status, json) = post(&app, &format!("/api/stories/{id}/like")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["likes"].as_u64().unwrap(), likes + 1);

    let (_, stories) = get_json(&app, "/api/stories").await;
    assert_eq!(stories["stories"][0]["likes"].as_u64().unwrap(), likes + 1);
}

#[tokio::test]
async fn test_like_unknown_story() {
    let app = seed_app();
    let (status, json) = post(&app, "/api/stories/999/like").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "No story with id 999");
}

#[tokio::test]
async fn test_create_story_is_listed() {
    let app = seed_app();
    let (status, json) = post_json(
        &app,
        "/api/stories",
        json!({
            "title": "Sunrise at Nandi Hills",
            "content": "Left at 4am and beat the crowds.",
            "author": "Meera",
            "route": "Hebbal to Nandi Hills",
            "category": "adventure"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["id"], 7);
    assert_eq!(json["likes"], 0);
    assert_eq!(json["author"], "Meera");

    let (_, stories) = get_json(&app, "/api/stories").await;
    let stories = stories["stories"].as_array().unwrap();
    assert_eq!(stories.len(), 7);
    let last = stories.last().unwrap();
    assert_eq!(last["id"], 7);
    assert_eq!(last["title"], "Sunrise at Nandi Hills");
    assert_eq!(last["category"], "adventure");

    let (status, liked) = post(&app, "/api/stories/7/like").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(liked["likes"], 1);
}

#[tokio::test]
async fn test_create_story_defaults_optional_fields() {
    let app = seed_app();
    let (status, json) = post_json(
        &app,
        "/api/stories",
        json!({"title": "Rainy commute", "content": "Wet but fun.", "category": "monsoon"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["author"], "Anonymous rider");
    assert_eq!(json["category"], "other");
}

#[tokio::test]
async fn test_create_empty_story_rejected() {
    let app = seed_app();
    let (status, json) = post_json(
        &app,
        "/api/stories",
        json!({"title": "   ", "content": "Body"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Please fill in both title and story content");

    let (_, stories) = get_json(&app, "/api/stories").await;
    assert_eq!(stories["stories"].as_array().unwrap().len(), 6);
}
