// ABOUTME: Recipe catalog queries: filtered search, batched ingredient fetch, ratings
// ABOUTME: Implements substitution-aware ingredient matching in SQL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Catalog query operations
//!
//! `find_recipes` applies all filters conjunctively. An ingredient term
//! matches a recipe when some ingredient name contains the term as a
//! case-insensitive substring, or when the recipe uses a registered
//! substitute for an ingredient whose name contains the term.

use crate::errors::{AppError, AppResult};
use crate::models::{MealCategory, Recipe, RecipeDetail, RecipeFilters, RecipeIngredient};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// One EXISTS clause per ingredient term; takes two `%term%` binds
/// (direct name match, then substitute-target match)
const INGREDIENT_TERM_CONDITION: &str = r"
    EXISTS (
        SELECT 1 FROM recipe_ingredients ri
        JOIN ingredients i ON ri.ingredient_id = i.id
        WHERE ri.recipe_id = r.id AND (
            LOWER(i.name) LIKE LOWER(?) OR
            i.id IN (
                SELECT s.substitute_ingredient_id
                FROM substitutions s
                JOIN ingredients i2 ON s.ingredient_id = i2.id
                WHERE LOWER(i2.name) LIKE LOWER(?)
            )
        )
    )
";

/// Read-mostly recipe catalog backed by `SQLite`
///
/// Cloning shares the underlying pool.
#[derive(Clone)]
pub struct RecipeCatalog {
    pool: SqlitePool,
}

impl RecipeCatalog {
    /// Create a new catalog manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find recipes matching all present filters
    ///
    /// No filters present returns the entire catalog. Results are ordered
    /// by title so identical queries yield identical row order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_recipes(&self, filters: &RecipeFilters) -> AppResult<Vec<Recipe>> {
        let mut sql = String::from(
            "SELECT DISTINCT r.id, r.title, r.category, r.instructions, \
             r.calories, r.protein, r.carbs, r.fat FROM recipes r",
        );
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(tag) = &filters.cultural_tag {
            sql.push_str(" JOIN recipe_cultural_tags rct ON r.id = rct.recipe_id");
            conditions.push("rct.tag = ?".into());
            params.push(tag.clone());
        }

        // One join per dietary tag: the recipe must carry every listed tag
        if let Some(tags) = &filters.dietary_tags {
            for (i, tag) in tags.iter().enumerate() {
                let alias = format!("rdt{i}");
                sql.push_str(&format!(
                    " JOIN recipe_dietary_tags {alias} ON r.id = {alias}.recipe_id"
                ));
                conditions.push(format!("{alias}.tag = ?"));
                params.push(tag.clone());
            }
        }

        if let Some(category) = filters.category {
            conditions.push("r.category = ?".into());
            params.push(category.as_str().to_owned());
        }

        // Every term must be satisfied by some ingredient of the recipe.
        // Terms are trimmed first; empty terms are dropped.
        if let Some(terms) = &filters.ingredient_terms {
            for term in terms.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
                conditions.push(INGREDIENT_TERM_CONDITION.into());
                let pattern = format!("%{term}%");
                params.push(pattern.clone());
                params.push(pattern);
            }
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY r.title");

        let mut query = sqlx::query(&sql);
        for param in &params {
            query = query.bind(param.as_str());
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query recipes: {e}")))?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// Fetch the combined ingredient list for a set of recipes
    ///
    /// One batched lookup regardless of plan length; results are distinct
    /// (name, category) pairs sorted by category then name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn fetch_ingredients(&self, recipe_ids: &[i64]) -> AppResult<Vec<RecipeIngredient>> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; recipe_ids.len()].join(", ");
        let sql = format!(
            "SELECT DISTINCT i.name, i.category \
             FROM ingredients i \
             JOIN recipe_ingredients ri ON i.id = ri.ingredient_id \
             WHERE ri.recipe_id IN ({placeholders}) \
             ORDER BY i.category, i.name"
        );

        let mut query = sqlx::query(&sql);
        for id in recipe_ids {
            query = query.bind(*id);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch ingredients: {e}")))?;

        rows.iter()
            .map(|row| {
                Ok(RecipeIngredient {
                    name: row.try_get("name")?,
                    category: row.try_get("category")?,
                })
            })
            .collect()
    }

    /// Get a single recipe with its tags, rating, and ingredient list
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails
    pub async fn get_recipe(&self, recipe_id: i64) -> AppResult<Option<RecipeDetail>> {
        let row = sqlx::query(
            r"
            SELECT id, title, category, instructions, calories, protein, carbs, fat
            FROM recipes
            WHERE id = ?
            ",
        )
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let recipe = row_to_recipe(&row)?;

        let dietary_tags = self
            .tags_for(recipe_id, "recipe_dietary_tags")
            .await?;
        let cultural_tags = self
            .tags_for(recipe_id, "recipe_cultural_tags")
            .await?;

        let rating = sqlx::query("SELECT rating FROM ratings WHERE recipe_id = ?")
            .bind(recipe_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get rating: {e}")))?
            .map(|r| r.try_get::<i64, _>("rating"))
            .transpose()?;

        let ingredients = self.fetch_ingredients(&[recipe_id]).await?;

        Ok(Some(RecipeDetail {
            recipe,
            dietary_tags,
            cultural_tags,
            rating,
            ingredients,
        }))
    }

    /// Upsert the user rating for a recipe (last write wins)
    ///
    /// The 1..=5 range is validated at the request boundary; the table's
    /// CHECK constraint backstops direct writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails
    pub async fn set_rating(&self, recipe_id: i64, rating: i64) -> AppResult<()> {
        sqlx::query("INSERT OR REPLACE INTO ratings (recipe_id, rating) VALUES (?, ?)")
            .bind(recipe_id)
            .bind(rating)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to save rating: {e}")))?;
        Ok(())
    }

    async fn tags_for(&self, recipe_id: i64, table: &str) -> AppResult<Vec<String>> {
        // Table name comes from the two callers above, never from input
        let sql = format!("SELECT tag FROM {table} WHERE recipe_id = ? ORDER BY tag");
        let rows = sqlx::query(&sql)
            .bind(recipe_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch tags: {e}")))?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("tag").map_err(AppError::from))
            .collect()
    }
}

/// Convert a catalog row into a `Recipe`
fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let raw_category: String = row.try_get("category")?;
    let category = MealCategory::parse(&raw_category).ok_or_else(|| {
        AppError::database(format!("Unknown meal category in catalog: {raw_category}"))
    })?;

    Ok(Recipe {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        category,
        instructions: row.try_get("instructions")?,
        calories: row.try_get("calories")?,
        protein: row.try_get("protein")?,
        carbs: row.try_get("carbs")?,
        fat: row.try_get("fat")?,
    })
}
