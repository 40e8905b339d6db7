// ABOUTME: Integration tests for the HTTP API surface
// ABOUTME: Exercises search, detail, ratings, plan generation, and export caching

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use souschef::cache::ExportCache;
use souschef::database::RecipeCatalog;
use souschef::routes::{self, AppState};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

async fn seed_catalog(pool: &SqlitePool) {
    for (id, title, category) in [
        (1, "Congee", "breakfast"),
        (2, "Shakshuka", "breakfast"),
        (3, "Salmon Rice Bowl", "lunch"),
        (4, "Lentil Curry", "lunch"),
        (5, "Tagine", "dinner"),
        (6, "Bruschetta", "appetizer"),
        (7, "Baklava", "dessert"),
        (8, "Horchata", "drink"),
    ] {
        common::insert_recipe(pool, id, title, category).await;
    }

    common::insert_ingredient(pool, 10, "salmon", "protein").await;
    common::insert_ingredient(pool, 11, "rice", "grain").await;
    common::link_ingredient(pool, 3, 10).await;
    common::link_ingredient(pool, 3, 11).await;

    common::add_dietary_tag(pool, 4, "vegan").await;
    common::add_cultural_tag(pool, 5, "African").await;
}

async fn test_app() -> Router {
    let pool = common::create_test_db().await;
    seed_catalog(&pool).await;
    let state = Arc::new(AppState {
        catalog: RecipeCatalog::new(pool),
        export_cache: ExportCache::new(8),
        max_plan_days: 14,
    });
    routes::router(state)
}

async fn send_json(app: &Router, method: Method, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = test_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_search_all_recipes() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/recipes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 8);
}

#[tokio::test]
async fn test_search_with_filters() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/recipes?category=lunch&dietary_tags=vegan").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["recipes"][0]["title"], "Lentil Curry");
}

#[tokio::test]
async fn test_search_unknown_category_is_empty_not_error() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/recipes?category=brunch").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert!(body["recipes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_recipe_detail_and_not_found() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/recipes/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Salmon Rice Bowl");
    assert_eq!(body["ingredients"].as_array().unwrap().len(), 2);

    let (status, _) = get(&app, "/api/recipes/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rating_validation_and_upsert() {
    let app = test_app().await;

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/recipes/3/rating",
        serde_json::json!({ "rating": 6 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/recipes/3/rating",
        serde_json::json!({ "rating": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, detail) = get(&app, "/api/recipes/3").await;
    assert_eq!(detail["rating"], 4);

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/recipes/999/rating",
        serde_json::json!({ "rating": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generate_plan() {
    let app = test_app().await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/meal-plans",
        serde_json::json!({ "days": 2 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let days = body["plan"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["label"], "Day 1");
    assert_eq!(days[0]["meals"].as_array().unwrap().len(), 6);
    assert_eq!(body["metadata"]["days"], 2);
}

#[tokio::test]
async fn test_generate_plan_pantry_defaults_to_ingredients() {
    let app = test_app().await;

    // The fridge holds rice, so only salmon can be missing from the
    // salmon lunch; rice never appears on the shopping list
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/meal-plans",
        serde_json::json!({ "days": 1, "ingredients": ["rice"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["shopping_list"].get("grain").is_none());
}

#[tokio::test]
async fn test_generate_plan_rejects_day_bounds() {
    let app = test_app().await;

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/meal-plans",
        serde_json::json!({ "days": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/meal-plans",
        serde_json::json!({ "days": 15 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
}

#[tokio::test]
async fn test_export_is_cached_and_stable() {
    let app = test_app().await;

    let (_, generated) = send_json(
        &app,
        Method::POST,
        "/api/meal-plans",
        serde_json::json!({ "days": 1 }),
    )
    .await;

    let request = serde_json::json!({ "plan": generated["plan"], "pantry": ["rice"] });

    let (status, first) = send_json(&app, Method::POST, "/api/meal-plans/export", request.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["format"], "souschef/meal-plan-export");
    assert!(first["digest"].as_str().unwrap().len() == 64);

    // The second export is the cached document, timestamp included
    let (status, second) = send_json(&app, Method::POST, "/api/meal-plans/export", request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_export_key_depends_on_pantry() {
    let app = test_app().await;

    let (_, generated) = send_json(
        &app,
        Method::POST,
        "/api/meal-plans",
        serde_json::json!({ "days": 1 }),
    )
    .await;

    let with_rice = serde_json::json!({ "plan": generated["plan"], "pantry": ["rice"] });
    let bare = serde_json::json!({ "plan": generated["plan"], "pantry": [] });

    let (_, first) = send_json(&app, Method::POST, "/api/meal-plans/export", with_rice).await;
    let (_, second) = send_json(&app, Method::POST, "/api/meal-plans/export", bare).await;

    // Same plan digest, different shopping lists
    assert_eq!(first["digest"], second["digest"]);
    assert_ne!(first["shopping_list"], second["shopping_list"]);
}
