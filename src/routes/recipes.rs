// ABOUTME: Catalog search, recipe detail, and rating route handlers
// ABOUTME: Maps query strings to typed catalog filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Recipe catalog routes
//!
//! Search is a content operation: a malformed filter (an unknown meal
//! category) produces an empty listing, not an error. Rating writes are
//! validated commands and reject out-of-range values.

use super::AppState;
use crate::errors::AppError;
use crate::models::{MealCategory, RecipeFilters};
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Query parameters for catalog search
#[derive(Debug, Deserialize)]
pub struct SearchRecipesQuery {
    /// Comma-separated ingredient terms
    pub ingredients: Option<String>,
    /// Comma-separated dietary tags (all must match)
    pub dietary_tags: Option<String>,
    pub cultural_tag: Option<String>,
    pub category: Option<String>,
}

/// Rating submission body
#[derive(Debug, Serialize, Deserialize)]
pub struct RateRecipeRequest {
    pub rating: i64,
}

/// Recipe catalog routes handler
pub struct RecipesRoutes;

impl RecipesRoutes {
    /// Create all recipe routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/recipes", get(Self::handle_search))
            .route("/api/recipes/:id", get(Self::handle_get))
            .route("/api/recipes/:id/rating", post(Self::handle_rate))
            .with_state(state)
    }

    /// Handle GET /api/recipes - Search the catalog with optional filters
    async fn handle_search(
        State(state): State<Arc<AppState>>,
        Query(query): Query<SearchRecipesQuery>,
    ) -> Result<Response, AppError> {
        // Unknown category strings yield an empty result, not an error
        let category = match query.category.as_deref() {
            Some(raw) => match MealCategory::parse(raw) {
                Some(category) => Some(category),
                None => {
                    return Ok((
                        StatusCode::OK,
                        Json(serde_json::json!({ "recipes": [], "total": 0 })),
                    )
                        .into_response());
                }
            },
            None => None,
        };

        let filters = RecipeFilters {
            ingredient_terms: parse_csv(query.ingredients.as_deref()),
            dietary_tags: parse_csv(query.dietary_tags.as_deref()),
            cultural_tag: query.cultural_tag.filter(|t| !t.trim().is_empty()),
            category,
        };

        let recipes = state.catalog.find_recipes(&filters).await?;
        let total = recipes.len();

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "recipes": recipes, "total": total })),
        )
            .into_response())
    }

    /// Handle GET /api/recipes/:id - Full recipe detail
    async fn handle_get(
        State(state): State<Arc<AppState>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let detail = state
            .catalog
            .get_recipe(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

        Ok((StatusCode::OK, Json(detail)).into_response())
    }

    /// Handle POST /api/recipes/:id/rating - Upsert a rating (last write wins)
    async fn handle_rate(
        State(state): State<Arc<AppState>>,
        Path(id): Path<i64>,
        Json(request): Json<RateRecipeRequest>,
    ) -> Result<Response, AppError> {
        if !(1..=5).contains(&request.rating) {
            return Err(AppError::out_of_range("rating must be between 1 and 5"));
        }

        if state.catalog.get_recipe(id).await?.is_none() {
            return Err(AppError::not_found(format!("Recipe {id}")));
        }

        state.catalog.set_rating(id, request.rating).await?;
        info!(recipe_id = id, rating = request.rating, "rating saved");

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "message": "Rating saved" })),
        )
            .into_response())
    }
}

/// Split a comma-separated value into trimmed, non-empty entries
fn parse_csv(raw: Option<&str>) -> Option<Vec<String>> {
    let entries: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}
