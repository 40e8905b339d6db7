// ABOUTME: Shopping list aggregation: plan ingredients minus the user's pantry
// ABOUTME: Bidirectional case-insensitive substring matching against pantry entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! # Shopping List Aggregator
//!
//! Derives, per ingredient category, the deduplicated set of ingredient
//! names the plan requires but the pantry does not cover. The "held"
//! test is a bidirectional case-insensitive substring match, so pantry
//! "chicken" covers "chicken breast" and pantry "grilled chicken breast
//! strips" covers "chicken breast". The looseness is intentional and can
//! produce false positives (pantry "egg" also covers "eggplant").

use crate::database::RecipeCatalog;
use crate::errors::AppResult;
use crate::models::{MealPlan, ShoppingList};
use tracing::debug;

/// Compute the ingredients missing for a plan given the user's pantry
///
/// Recipe identities are collected once across the whole plan and their
/// ingredients fetched in a single batched lookup, bounding cost by the
/// number of distinct recipes rather than the day count. An empty plan
/// yields an empty list.
///
/// # Errors
///
/// Returns an error if the ingredient fetch fails
pub async fn missing_ingredients(
    catalog: &RecipeCatalog,
    plan: &MealPlan,
    pantry: &[String],
) -> AppResult<ShoppingList> {
    let recipe_ids = plan.recipe_ids();
    if recipe_ids.is_empty() {
        return Ok(ShoppingList::default());
    }

    let ingredients = catalog.fetch_ingredients(&recipe_ids).await?;
    let pantry = normalize_pantry(pantry);

    let mut list = ShoppingList::default();
    for item in ingredients {
        if !is_held(&item.name, &pantry) {
            list.add(item.category, item.name);
        }
    }

    debug!(
        recipes = recipe_ids.len(),
        categories = list.items.len(),
        "shopping list aggregated"
    );
    Ok(list)
}

/// Trim and lowercase pantry entries, dropping empties
#[must_use]
pub fn normalize_pantry(pantry: &[String]) -> Vec<String> {
    pantry
        .iter()
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Whether a normalized pantry covers an ingredient
///
/// True when any pantry entry contains the ingredient name or the
/// ingredient name contains the pantry entry (case-insensitive).
#[must_use]
pub fn is_held(ingredient_name: &str, pantry: &[String]) -> bool {
    let name = ingredient_name.trim().to_lowercase();
    pantry
        .iter()
        .any(|entry| name.contains(entry.as_str()) || entry.contains(&name))
}
