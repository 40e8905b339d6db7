// ABOUTME: Meal plan assembly: one recipe per (day, category) slot
// ABOUTME: Enforces the no-repeat invariant with tiered fallback pools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! # Plan Assembler
//!
//! Builds an N-day meal plan with all six meal categories per day.
//! Candidate pools are computed once per category, not once per day, so
//! re-querying cannot skew selection fairness. A single plan-scoped set
//! of used recipe identities prevents repeats until every distinct
//! candidate for a category has been served.
//!
//! Slot selection tiers, in order:
//! 1. unused recipe from the filtered (primary) pool
//! 2. unused recipe from the category-only (fallback) pool
//! 3. any recipe from the primary pool (repeats now unavoidable)
//! 4. any recipe from the fallback pool
//! 5. leave the slot absent (no recipe for this category exists at all)
//!
//! Only tiers 1 and 2 mark a recipe as used.

use crate::database::RecipeCatalog;
use crate::errors::AppResult;
use crate::models::{DayPlan, MealCategory, MealPlan, MealSlot, PlanFilters, Recipe, RecipeFilters};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info};

/// Precomputed candidate pools for one meal category
struct CategoryPools {
    category: MealCategory,
    /// All caller filters plus this category
    primary: Vec<Recipe>,
    /// This category only, no other filters
    fallback: Vec<Recipe>,
}

/// Assemble a meal plan covering `days` days
///
/// Accepts any positive day count; the request boundary enforces the
/// configured maximum before calling in. Selection is uniformly random
/// over the eligible candidates at each slot.
///
/// # Errors
///
/// Returns an error only when a catalog query fails; exhausted pools
/// degrade to repeats or absent slots, never to errors.
pub async fn generate_plan<R: Rng>(
    catalog: &RecipeCatalog,
    days: u32,
    filters: &PlanFilters,
    rng: &mut R,
) -> AppResult<MealPlan> {
    let mut pools = Vec::with_capacity(MealCategory::ALL.len());
    for category in MealCategory::ALL {
        let category_filters = filters.with_category(category);
        let primary = catalog.find_recipes(&category_filters).await?;

        // With no caller filters the two pools are identical; skip the
        // second query
        let fallback = if category_filters.is_category_only() {
            primary.clone()
        } else {
            catalog
                .find_recipes(&RecipeFilters::for_category(category))
                .await?
        };

        debug!(
            category = %category,
            primary = primary.len(),
            fallback = fallback.len(),
            "candidate pools computed"
        );

        pools.push(CategoryPools {
            category,
            primary,
            fallback,
        });
    }

    let mut used: HashSet<i64> = HashSet::new();
    let mut day_plans = Vec::with_capacity(days as usize);

    for day in 1..=days {
        let meals = pools
            .iter()
            .map(|pool| MealSlot {
                category: pool.category,
                recipe: select_recipe(pool, &mut used, rng),
            })
            .collect();

        day_plans.push(DayPlan {
            label: format!("Day {day}"),
            meals,
        });
    }

    let plan = MealPlan { days: day_plans };
    info!(
        days,
        distinct_recipes = plan.recipe_ids().len(),
        "meal plan assembled"
    );
    Ok(plan)
}

/// Pick a recipe for one slot, preferring unused candidates
fn select_recipe<R: Rng>(
    pools: &CategoryPools,
    used: &mut HashSet<i64>,
    rng: &mut R,
) -> Option<Recipe> {
    let fresh_primary: Vec<&Recipe> = pools
        .primary
        .iter()
        .filter(|r| !used.contains(&r.id))
        .collect();
    if let Some(pick) = fresh_primary.choose(rng) {
        used.insert(pick.id);
        return Some((*pick).clone());
    }

    let fresh_fallback: Vec<&Recipe> = pools
        .fallback
        .iter()
        .filter(|r| !used.contains(&r.id))
        .collect();
    if let Some(pick) = fresh_fallback.choose(rng) {
        used.insert(pick.id);
        return Some((*pick).clone());
    }

    // Every distinct candidate has been served; repeats are permitted
    // and intentionally not recorded in the used set
    if let Some(pick) = pools.primary.choose(rng) {
        return Some(pick.clone());
    }
    pools.fallback.choose(rng).cloned()
}
