// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory catalog creation and seeding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

#![allow(dead_code, clippy::unwrap_used, missing_docs)]

//! Shared test utilities for `souschef`

use souschef::database;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Create an empty in-memory catalog with the full schema
///
/// A single connection keeps the in-memory database shared across all
/// statements in a test.
pub async fn create_test_db() -> SqlitePool {
    init_test_logging();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    database::migrate(&pool).await.unwrap();
    pool
}

/// Insert a recipe with fixed nutrition values
pub async fn insert_recipe(pool: &SqlitePool, id: i64, title: &str, category: &str) {
    sqlx::query(
        r"
        INSERT INTO recipes (id, title, category, instructions, calories, protein, carbs, fat)
        VALUES (?, ?, ?, 'Combine and cook.', 300, 10.0, 40.0, 8.0)
        ",
    )
    .bind(id)
    .bind(title)
    .bind(category)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert an ingredient with an explicit id
pub async fn insert_ingredient(pool: &SqlitePool, id: i64, name: &str, category: &str) {
    sqlx::query("INSERT INTO ingredients (id, name, category) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(category)
        .execute(pool)
        .await
        .unwrap();
}

/// Link a recipe to an ingredient
pub async fn link_ingredient(pool: &SqlitePool, recipe_id: i64, ingredient_id: i64) {
    sqlx::query("INSERT INTO recipe_ingredients (recipe_id, ingredient_id) VALUES (?, ?)")
        .bind(recipe_id)
        .bind(ingredient_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Tag a recipe with a dietary label
pub async fn add_dietary_tag(pool: &SqlitePool, recipe_id: i64, tag: &str) {
    sqlx::query("INSERT INTO recipe_dietary_tags (recipe_id, tag) VALUES (?, ?)")
        .bind(recipe_id)
        .bind(tag)
        .execute(pool)
        .await
        .unwrap();
}

/// Tag a recipe with a cultural label
pub async fn add_cultural_tag(pool: &SqlitePool, recipe_id: i64, tag: &str) {
    sqlx::query("INSERT INTO recipe_cultural_tags (recipe_id, tag) VALUES (?, ?)")
        .bind(recipe_id)
        .bind(tag)
        .execute(pool)
        .await
        .unwrap();
}

/// Register a directed substitution pair
pub async fn add_substitution(pool: &SqlitePool, ingredient_id: i64, substitute_id: i64) {
    sqlx::query(
        "INSERT INTO substitutions (ingredient_id, substitute_ingredient_id) VALUES (?, ?)",
    )
    .bind(ingredient_id)
    .bind(substitute_id)
    .execute(pool)
    .await
    .unwrap();
}
