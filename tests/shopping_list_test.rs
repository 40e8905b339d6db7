// ABOUTME: Integration tests for shopping list aggregation over seeded catalogs
// ABOUTME: Covers pantry subtraction, cross-recipe dedup, and determinism

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use souschef::database::RecipeCatalog;
use souschef::models::{DayPlan, MealCategory, MealPlan, MealSlot};
use souschef::services::shopping_list;
use sqlx::SqlitePool;

async fn seed_pantry_catalog(pool: &SqlitePool) {
    common::insert_recipe(pool, 1, "Salmon Rice Bowl", "lunch").await;
    common::insert_recipe(pool, 2, "Ginger Stir Fry", "dinner").await;

    common::insert_ingredient(pool, 10, "salmon", "protein").await;
    common::insert_ingredient(pool, 11, "jasmine rice", "grain").await;
    common::insert_ingredient(pool, 12, "ginger", "vegetable").await;
    common::insert_ingredient(pool, 13, "vegetable broth", "pantry").await;

    common::link_ingredient(pool, 1, 10).await;
    common::link_ingredient(pool, 1, 11).await;
    common::link_ingredient(pool, 2, 11).await;
    common::link_ingredient(pool, 2, 12).await;
    common::link_ingredient(pool, 2, 13).await;
}

/// Build a one-day plan that serves the given recipe ids as lunches
async fn plan_with(catalog: &RecipeCatalog, ids: &[i64]) -> MealPlan {
    let mut meals = Vec::new();
    for &id in ids {
        let detail = catalog.get_recipe(id).await.unwrap().unwrap();
        meals.push(MealSlot {
            category: MealCategory::Lunch,
            recipe: Some(detail.recipe),
        });
    }
    MealPlan {
        days: vec![DayPlan {
            label: "Day 1".to_owned(),
            meals,
        }],
    }
}

#[tokio::test]
async fn test_pantry_subtraction_groups_by_category() {
    let pool = common::create_test_db().await;
    seed_pantry_catalog(&pool).await;
    let catalog = RecipeCatalog::new(pool);
    let plan = plan_with(&catalog, &[1, 2]).await;

    // Pantry rice covers "jasmine rice"; salmon, ginger, and broth remain
    let pantry = vec!["rice".to_owned()];
    let list = shopping_list::missing_ingredients(&catalog, &plan, &pantry)
        .await
        .unwrap();

    assert_eq!(list.items.len(), 3);
    assert!(list.items["protein"].contains("salmon"));
    assert!(list.items["vegetable"].contains("ginger"));
    assert!(list.items["pantry"].contains("vegetable broth"));
    assert!(!list.items.contains_key("grain"));
}

#[tokio::test]
async fn test_empty_pantry_lists_everything_once() {
    let pool = common::create_test_db().await;
    seed_pantry_catalog(&pool).await;
    let catalog = RecipeCatalog::new(pool);
    let plan = plan_with(&catalog, &[1, 2]).await;

    let list = shopping_list::missing_ingredients(&catalog, &plan, &[])
        .await
        .unwrap();

    // Both recipes use jasmine rice; it appears once
    assert_eq!(list.items["grain"].len(), 1);
    let total: usize = list.items.values().map(std::collections::BTreeSet::len).sum();
    assert_eq!(total, 4);
}

#[tokio::test]
async fn test_full_pantry_yields_empty_list() {
    let pool = common::create_test_db().await;
    seed_pantry_catalog(&pool).await;
    let catalog = RecipeCatalog::new(pool);
    let plan = plan_with(&catalog, &[1, 2]).await;

    let pantry = vec![
        "salmon".to_owned(),
        "rice".to_owned(),
        "ginger".to_owned(),
        "broth".to_owned(),
    ];
    let list = shopping_list::missing_ingredients(&catalog, &plan, &pantry)
        .await
        .unwrap();

    assert!(list.is_empty());
}

#[tokio::test]
async fn test_empty_plan_yields_empty_list() {
    let pool = common::create_test_db().await;
    let catalog = RecipeCatalog::new(pool);

    let plan = MealPlan { days: Vec::new() };
    let list = shopping_list::missing_ingredients(&catalog, &plan, &["rice".to_owned()])
        .await
        .unwrap();

    assert!(list.is_empty());
}

#[tokio::test]
async fn test_unfilled_slots_contribute_nothing() {
    let pool = common::create_test_db().await;
    seed_pantry_catalog(&pool).await;
    let catalog = RecipeCatalog::new(pool);

    let plan = MealPlan {
        days: vec![DayPlan {
            label: "Day 1".to_owned(),
            meals: vec![MealSlot {
                category: MealCategory::Dessert,
                recipe: None,
            }],
        }],
    };
    let list = shopping_list::missing_ingredients(&catalog, &plan, &[])
        .await
        .unwrap();

    assert!(list.is_empty());
}

#[tokio::test]
async fn test_aggregation_is_deterministic() {
    let pool = common::create_test_db().await;
    seed_pantry_catalog(&pool).await;
    let catalog = RecipeCatalog::new(pool);
    let plan = plan_with(&catalog, &[1, 2]).await;
    let pantry = vec!["GINGER  ".to_owned()];

    let first = shopping_list::missing_ingredients(&catalog, &plan, &pantry)
        .await
        .unwrap();
    let second = shopping_list::missing_ingredients(&catalog, &plan, &pantry)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert!(!first.items.contains_key("vegetable"));
}
