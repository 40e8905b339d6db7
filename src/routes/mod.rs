// ABOUTME: HTTP route assembly for the Sous Chef JSON API
// ABOUTME: Shared request state and router construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! HTTP routes
//!
//! A thin request/response boundary over the catalog and services.
//! Input validation (day-count bounds, rating range) happens here,
//! before anything reaches the core.

use crate::cache::ExportCache;
use crate::database::RecipeCatalog;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Health and readiness endpoints
pub mod health;

/// Meal plan generation and export
pub mod meal_plans;

/// Catalog search, recipe detail, and ratings
pub mod recipes;

/// Shared state handed to every route handler
pub struct AppState {
    /// Read-only recipe catalog
    pub catalog: RecipeCatalog,
    /// Bounded cache of export artifacts
    pub export_cache: ExportCache,
    /// Upper bound on requested plan length
    pub max_plan_days: u32,
}

/// Build the full application router
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(recipes::RecipesRoutes::routes(state.clone()))
        .merge(meal_plans::MealPlanRoutes::routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
