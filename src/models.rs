// ABOUTME: Core data models for the Sous Chef meal planning API
// ABOUTME: Defines Recipe, MealCategory, MealPlan, ShoppingList and filter types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! # Data Models
//!
//! Shared data structures for the recipe catalog, assembled meal plans,
//! and derived shopping lists.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The fixed set of meal categories filled for every planned day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Appetizer,
    Dessert,
    Drink,
}

impl MealCategory {
    /// Slot order within a day: breakfast through drink
    pub const ALL: [MealCategory; 6] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Appetizer,
        MealCategory::Dessert,
        MealCategory::Drink,
    ];

    /// Database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Appetizer => "appetizer",
            MealCategory::Dessert => "dessert",
            MealCategory::Drink => "drink",
        }
    }

    /// Parse from a database or query string value
    ///
    /// Unknown strings yield `None`; catalog searches treat that as an
    /// empty result, not an error.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealCategory::Breakfast),
            "lunch" => Some(MealCategory::Lunch),
            "dinner" => Some(MealCategory::Dinner),
            "appetizer" => Some(MealCategory::Appetizer),
            "dessert" => Some(MealCategory::Dessert),
            "drink" => Some(MealCategory::Drink),
            _ => None,
        }
    }
}

impl std::fmt::Display for MealCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe record from the catalog
///
/// Immutable except for its user rating, which lives in a separate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque catalog identity
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Meal category this recipe belongs to
    pub category: MealCategory,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Calories per serving
    pub calories: i64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

/// An ingredient reference as returned by the batched plan-ingredient fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name (original case preserved for display)
    pub name: String,
    /// Ingredient category label ("protein", "vegetable", ...)
    pub category: String,
}

/// Full recipe view with associated tags, rating, and ingredient list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Free-text dietary labels ("vegan", "gluten-free", ...)
    pub dietary_tags: Vec<String>,
    /// Cultural cuisine labels
    pub cultural_tags: Vec<String>,
    /// Latest user rating (1-5), if any
    pub rating: Option<i64>,
    /// Ingredients in catalog order
    pub ingredients: Vec<RecipeIngredient>,
}

/// Catalog query filters; all present filters are conjunctive
#[derive(Debug, Clone, Default)]
pub struct RecipeFilters {
    /// Free-text ingredient terms; every term must match some ingredient
    /// (directly or via a registered substitution)
    pub ingredient_terms: Option<Vec<String>>,
    /// Dietary tags; a recipe must carry every listed tag
    pub dietary_tags: Option<Vec<String>>,
    /// Exact cultural tag
    pub cultural_tag: Option<String>,
    /// Exact meal category
    pub category: Option<MealCategory>,
}

impl RecipeFilters {
    /// Filter on a meal category alone
    #[must_use]
    pub fn for_category(category: MealCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// True when no filter other than the category is set
    #[must_use]
    pub fn is_category_only(&self) -> bool {
        self.ingredient_terms.as_ref().map_or(true, Vec::is_empty)
            && self.dietary_tags.as_ref().map_or(true, Vec::is_empty)
            && self.cultural_tag.is_none()
    }
}

/// Caller filters for plan assembly (the category axis is owned by the
/// assembler, which queries one pool per category)
#[derive(Debug, Clone, Default)]
pub struct PlanFilters {
    pub ingredient_terms: Option<Vec<String>>,
    pub dietary_tags: Option<Vec<String>>,
    pub cultural_tag: Option<String>,
}

impl PlanFilters {
    /// Expand into catalog filters for one meal category
    #[must_use]
    pub fn with_category(&self, category: MealCategory) -> RecipeFilters {
        RecipeFilters {
            ingredient_terms: self.ingredient_terms.clone(),
            dietary_tags: self.dietary_tags.clone(),
            cultural_tag: self.cultural_tag.clone(),
            category: Some(category),
        }
    }
}

/// One (day, category) slot of a meal plan
///
/// The recipe is absent when no candidate existed in the catalog at all
/// for the slot's category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlot {
    pub category: MealCategory,
    pub recipe: Option<Recipe>,
}

/// A single planned day with its six meal slots in fixed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day label: "Day 1" ... "Day N"
    pub label: String,
    pub meals: Vec<MealSlot>,
}

/// A generated multi-day meal plan
///
/// Transient: built per request, never persisted beyond the current
/// request and its export artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
}

impl MealPlan {
    /// Distinct recipe identities referenced anywhere in the plan, sorted
    #[must_use]
    pub fn recipe_ids(&self) -> Vec<i64> {
        let ids: BTreeSet<i64> = self
            .days
            .iter()
            .flat_map(|day| day.meals.iter())
            .filter_map(|slot| slot.recipe.as_ref().map(|r| r.id))
            .collect();
        ids.into_iter().collect()
    }

    /// Recipes selected for one category across all days, in day order
    #[must_use]
    pub fn recipes_for(&self, category: MealCategory) -> Vec<&Recipe> {
        self.days
            .iter()
            .flat_map(|day| day.meals.iter())
            .filter(|slot| slot.category == category)
            .filter_map(|slot| slot.recipe.as_ref())
            .collect()
    }
}

/// Ingredients still needed for a plan, grouped by ingredient category
///
/// Sorted maps and sets keep output deterministic and stable for
/// identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    pub items: BTreeMap<String, BTreeSet<String>>,
}

impl ShoppingList {
    /// True when no ingredient is missing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a missing ingredient under its category, deduplicated by name
    pub fn add(&mut self, category: impl Into<String>, name: impl Into<String>) {
        self.items
            .entry(category.into())
            .or_default()
            .insert(name.into());
    }
}
