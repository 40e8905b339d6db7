// ABOUTME: Meal plan generation and export route handlers
// ABOUTME: Validates day counts at the boundary and serves cached export artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Meal plan routes
//!
//! The day-count bound is enforced here, before the assembler runs; the
//! assembler itself accepts any positive day count. Export documents are
//! served through the bounded content-hash cache.

use super::AppState;
use crate::cache::{export_cache_key, plan_digest};
use crate::errors::AppError;
use crate::models::{MealPlan, PlanFilters, ShoppingList};
use crate::services::{planner, shopping_list};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use http::StatusCode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Plan generation request body
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    /// Number of days to plan, 1 through the configured maximum
    pub days: u32,
    /// Fridge ingredients used to filter the catalog
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub dietary_tags: Option<Vec<String>>,
    #[serde(default)]
    pub cultural_tag: Option<String>,
    /// Ingredients already held; defaults to `ingredients` when absent
    #[serde(default)]
    pub pantry: Option<Vec<String>>,
}

/// Plan generation response
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratePlanResponse {
    pub plan: MealPlan,
    pub shopping_list: ShoppingList,
    pub metadata: PlanMetadata,
}

/// Request parameters echoed back with the generated plan
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub days: u32,
    pub ingredients: Vec<String>,
    pub dietary_tags: Vec<String>,
    pub cultural_tag: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Export request: a previously generated plan plus the pantry it was
/// built against
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportPlanRequest {
    pub plan: MealPlan,
    #[serde(default)]
    pub pantry: Vec<String>,
}

/// Meal plan routes handler
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal plan routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/meal-plans", post(Self::handle_generate))
            .route("/api/meal-plans/export", post(Self::handle_export))
            .with_state(state)
    }

    /// Handle POST /api/meal-plans - Generate a plan and its shopping list
    async fn handle_generate(
        State(state): State<Arc<AppState>>,
        Json(request): Json<GeneratePlanRequest>,
    ) -> Result<Response, AppError> {
        if request.days < 1 || request.days > state.max_plan_days {
            return Err(AppError::out_of_range(format!(
                "days must be between 1 and {}",
                state.max_plan_days
            )));
        }

        let filters = PlanFilters {
            ingredient_terms: request.ingredients.clone(),
            dietary_tags: request.dietary_tags.clone(),
            cultural_tag: request.cultural_tag.clone(),
        };

        let mut rng = StdRng::from_entropy();
        let plan = planner::generate_plan(&state.catalog, request.days, &filters, &mut rng).await?;

        // The fridge list doubles as the pantry unless one is given
        let pantry = request
            .pantry
            .clone()
            .or_else(|| request.ingredients.clone())
            .unwrap_or_default();
        let list = shopping_list::missing_ingredients(&state.catalog, &plan, &pantry).await?;

        info!(
            days = request.days,
            recipes = plan.recipe_ids().len(),
            "meal plan generated"
        );

        let response = GeneratePlanResponse {
            plan,
            shopping_list: list,
            metadata: PlanMetadata {
                days: request.days,
                ingredients: request.ingredients.unwrap_or_default(),
                dietary_tags: request.dietary_tags.unwrap_or_default(),
                cultural_tag: request.cultural_tag,
                generated_at: Utc::now(),
            },
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/meal-plans/export - Render a plan export document
    ///
    /// Identical plans hit the cache and are served without recomputation;
    /// the cache never influences plan generation itself.
    async fn handle_export(
        State(state): State<Arc<AppState>>,
        Json(request): Json<ExportPlanRequest>,
    ) -> Result<Response, AppError> {
        let digest = plan_digest(&request.plan)?;
        let cache_key = export_cache_key(&request.plan, &request.pantry)?;

        if let Some(document) = state.export_cache.get(&cache_key).await {
            return Ok((StatusCode::OK, Json(document)).into_response());
        }

        let list =
            shopping_list::missing_ingredients(&state.catalog, &request.plan, &request.pantry)
                .await?;

        let document = serde_json::json!({
            "format": "souschef/meal-plan-export",
            "digest": digest,
            "generated_at": Utc::now().to_rfc3339(),
            "plan": request.plan,
            "shopping_list": list,
        });

        state.export_cache.insert(cache_key, document.clone()).await;

        Ok((StatusCode::OK, Json(document)).into_response())
    }
}
