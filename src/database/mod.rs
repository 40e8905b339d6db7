// ABOUTME: SQLite connection management and schema creation for the recipe catalog
// ABOUTME: Provides pool setup, migrations, and the catalog manager module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Recipe catalog storage
//!
//! The catalog is a conventional relational store: recipes, ingredients,
//! their junction table, tag tables, directed ingredient substitutions,
//! and a single-row-per-recipe ratings table.

use crate::errors::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Recipe catalog queries and writes
pub mod recipes;

pub use recipes::RecipeCatalog;

/// Open a `SQLite` pool, creating the database file when missing
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened
pub async fn connect(database_url: &str) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!(database_url = %database_url, "database connected");
    Ok(pool)
}

/// Create catalog tables and lookup indexes when they do not exist
///
/// # Errors
///
/// Returns an error if a DDL statement fails
pub async fn migrate(pool: &SqlitePool) -> AppResult<()> {
    let statements = [
        r"
        CREATE TABLE IF NOT EXISTS recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            category TEXT NOT NULL,
            instructions TEXT NOT NULL,
            calories INTEGER NOT NULL,
            protein REAL NOT NULL,
            carbs REAL NOT NULL,
            fat REAL NOT NULL
        )
        ",
        r"
        CREATE TABLE IF NOT EXISTS ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            category TEXT NOT NULL
        )
        ",
        r"
        CREATE TABLE IF NOT EXISTS recipe_ingredients (
            recipe_id INTEGER NOT NULL,
            ingredient_id INTEGER NOT NULL,
            FOREIGN KEY (recipe_id) REFERENCES recipes (id),
            FOREIGN KEY (ingredient_id) REFERENCES ingredients (id),
            PRIMARY KEY (recipe_id, ingredient_id)
        )
        ",
        r"
        CREATE TABLE IF NOT EXISTS recipe_dietary_tags (
            recipe_id INTEGER NOT NULL,
            tag TEXT NOT NULL,
            FOREIGN KEY (recipe_id) REFERENCES recipes (id),
            PRIMARY KEY (recipe_id, tag)
        )
        ",
        r"
        CREATE TABLE IF NOT EXISTS recipe_cultural_tags (
            recipe_id INTEGER NOT NULL,
            tag TEXT NOT NULL,
            FOREIGN KEY (recipe_id) REFERENCES recipes (id),
            PRIMARY KEY (recipe_id, tag)
        )
        ",
        r"
        CREATE TABLE IF NOT EXISTS substitutions (
            ingredient_id INTEGER NOT NULL,
            substitute_ingredient_id INTEGER NOT NULL,
            FOREIGN KEY (ingredient_id) REFERENCES ingredients (id),
            FOREIGN KEY (substitute_ingredient_id) REFERENCES ingredients (id),
            PRIMARY KEY (ingredient_id, substitute_ingredient_id)
        )
        ",
        r"
        CREATE TABLE IF NOT EXISTS ratings (
            recipe_id INTEGER NOT NULL,
            rating INTEGER NOT NULL CHECK (rating >= 1 AND rating <= 5),
            FOREIGN KEY (recipe_id) REFERENCES recipes (id),
            PRIMARY KEY (recipe_id)
        )
        ",
        "CREATE INDEX IF NOT EXISTS idx_recipes_category ON recipes (category)",
        "CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_recipe ON recipe_ingredients (recipe_id)",
        "CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_ingredient ON recipe_ingredients (ingredient_id)",
        "CREATE INDEX IF NOT EXISTS idx_dietary_tags_tag ON recipe_dietary_tags (tag)",
        "CREATE INDEX IF NOT EXISTS idx_cultural_tags_tag ON recipe_cultural_tags (tag)",
        "CREATE INDEX IF NOT EXISTS idx_substitutions_ingredient ON substitutions (ingredient_id)",
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
