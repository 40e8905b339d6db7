// ABOUTME: Catalog seeder for the Sous Chef meal planning API
// ABOUTME: Populates recipes, ingredients, tags, substitutions, and sample ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Catalog seeder.
//!
//! Populates the database with a starter catalog spanning all six meal
//! categories and several cuisines, so plan generation works out of the
//! box.
//!
//! Usage:
//! ```bash
//! # Seed the default database
//! cargo run --bin seed-catalog
//!
//! # Seed a specific database, wiping existing catalog rows first
//! cargo run --bin seed-catalog -- --database-url sqlite:data/souschef.db --reset
//! ```

use anyhow::Result;
use clap::Parser;
use souschef::database;
use souschef::logging::LoggingConfig;
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-catalog",
    about = "Sous Chef catalog seeder",
    long_about = "Populate the recipe catalog with starter data"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Delete existing catalog rows before seeding
    #[arg(long)]
    reset: bool,
}

/// Ingredient name and category
const INGREDIENTS: &[(&str, &str)] = &[
    ("chicken breast", "protein"),
    ("beef", "protein"),
    ("salmon", "protein"),
    ("tofu", "protein"),
    ("eggs", "protein"),
    ("black beans", "protein"),
    ("lentils", "protein"),
    ("chickpeas", "protein"),
    ("shrimp", "protein"),
    ("onion", "vegetable"),
    ("garlic", "vegetable"),
    ("tomato", "vegetable"),
    ("bell pepper", "vegetable"),
    ("carrot", "vegetable"),
    ("broccoli", "vegetable"),
    ("spinach", "vegetable"),
    ("mushroom", "vegetable"),
    ("lettuce", "vegetable"),
    ("ginger", "vegetable"),
    ("cilantro", "vegetable"),
    ("rice", "grain"),
    ("pasta", "grain"),
    ("bread", "grain"),
    ("oats", "grain"),
    ("flour", "grain"),
    ("couscous", "grain"),
    ("tortillas", "grain"),
    ("quinoa", "grain"),
    ("milk", "dairy"),
    ("cheese", "dairy"),
    ("yogurt", "dairy"),
    ("butter", "dairy"),
    ("cream cheese", "dairy"),
    ("coconut milk", "dairy"),
    ("almond milk", "dairy"),
    ("salt", "spice"),
    ("pepper", "spice"),
    ("cumin", "spice"),
    ("paprika", "spice"),
    ("turmeric", "spice"),
    ("soy sauce", "spice"),
    ("olive oil", "spice"),
    ("sesame oil", "spice"),
    ("lime", "spice"),
    ("lemon", "spice"),
    ("chili powder", "spice"),
    ("oregano", "spice"),
    ("basil", "spice"),
    ("cinnamon", "spice"),
    ("vanilla", "spice"),
    ("miso paste", "spice"),
    ("apple", "fruit"),
    ("banana", "fruit"),
    ("orange", "fruit"),
    ("mango", "fruit"),
    ("avocado", "fruit"),
    ("dates", "fruit"),
    ("tea", "beverage"),
    ("coffee", "beverage"),
    ("green tea", "beverage"),
    ("almonds", "nuts"),
    ("walnuts", "nuts"),
    ("honey", "sweetener"),
    ("sugar", "sweetener"),
    ("vegetable broth", "broth"),
    ("chicken broth", "broth"),
];

/// Directed substitution pairs: (ingredient, substitute)
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("chicken breast", "eggs"),
    ("chicken breast", "tofu"),
    ("salmon", "shrimp"),
    ("tofu", "beef"),
    ("black beans", "chickpeas"),
    ("lentils", "black beans"),
    ("milk", "coconut milk"),
    ("milk", "almond milk"),
    ("cheese", "yogurt"),
    ("rice", "quinoa"),
    ("pasta", "couscous"),
    ("bread", "tortillas"),
    ("oats", "rice"),
    ("cumin", "turmeric"),
    ("paprika", "chili powder"),
    ("onion", "ginger"),
    ("tomato", "mushroom"),
    ("spinach", "broccoli"),
];

/// A seedable recipe with its associations, linked by ingredient name
struct SeedRecipe {
    title: &'static str,
    category: &'static str,
    instructions: &'static str,
    calories: i64,
    protein: f64,
    carbs: f64,
    fat: f64,
    ingredients: &'static [&'static str],
    dietary_tags: &'static [&'static str],
    cultural_tags: &'static [&'static str],
    rating: Option<i64>,
}

const RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Chicken Teriyaki Bowl",
        category: "lunch",
        instructions: "Marinate chicken in teriyaki sauce. Grill and serve over rice with steamed vegetables.",
        calories: 450,
        protein: 35.0,
        carbs: 45.0,
        fat: 12.0,
        ingredients: &["chicken breast", "rice", "soy sauce", "broccoli", "carrot"],
        dietary_tags: &[],
        cultural_tags: &["Asian"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Miso Soup",
        category: "appetizer",
        instructions: "Heat water, add miso paste and tofu. Simmer for 5 minutes.",
        calories: 80,
        protein: 6.0,
        carbs: 8.0,
        fat: 3.0,
        ingredients: &["miso paste", "tofu"],
        dietary_tags: &["vegetarian", "gluten-free"],
        cultural_tags: &["Asian"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Green Tea",
        category: "drink",
        instructions: "Steep green tea leaves in hot water for 3-5 minutes.",
        calories: 2,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
        ingredients: &["green tea"],
        dietary_tags: &["vegan", "vegetarian", "gluten-free"],
        cultural_tags: &["Asian"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Vegetable Fried Rice",
        category: "dinner",
        instructions: "Stir-fry rice with mixed vegetables, soy sauce, and sesame oil.",
        calories: 320,
        protein: 8.0,
        carbs: 58.0,
        fat: 8.0,
        ingredients: &["rice", "onion", "garlic", "broccoli", "soy sauce", "sesame oil"],
        dietary_tags: &["vegan", "vegetarian"],
        cultural_tags: &["Asian"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Mango Sticky Rice",
        category: "dessert",
        instructions: "Cook sticky rice with coconut milk, serve with fresh mango slices.",
        calories: 280,
        protein: 4.0,
        carbs: 52.0,
        fat: 8.0,
        ingredients: &["rice", "coconut milk", "mango"],
        dietary_tags: &["vegetarian"],
        cultural_tags: &["Asian"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Congee",
        category: "breakfast",
        instructions: "Cook rice in broth until porridge-like. Top with ginger.",
        calories: 200,
        protein: 6.0,
        carbs: 38.0,
        fat: 2.0,
        ingredients: &["rice", "vegetable broth", "ginger"],
        dietary_tags: &["vegan", "vegetarian", "gluten-free"],
        cultural_tags: &["Asian"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Jollof Rice",
        category: "dinner",
        instructions: "Cook rice with tomatoes, onions, peppers, and spices until fragrant.",
        calories: 380,
        protein: 12.0,
        carbs: 62.0,
        fat: 10.0,
        ingredients: &["rice", "tomato", "onion", "garlic", "paprika"],
        dietary_tags: &["gluten-free"],
        cultural_tags: &["African"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Spiced Lentil Stew",
        category: "lunch",
        instructions: "Cook lentils with onions, tomatoes, and warming spices.",
        calories: 290,
        protein: 18.0,
        carbs: 45.0,
        fat: 4.0,
        ingredients: &["lentils", "onion", "tomato", "turmeric"],
        dietary_tags: &["vegan", "vegetarian", "gluten-free"],
        cultural_tags: &["African"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Coconut Rice Pudding",
        category: "dessert",
        instructions: "Cook rice with coconut milk and sugar until creamy.",
        calories: 220,
        protein: 4.0,
        carbs: 42.0,
        fat: 6.0,
        ingredients: &["rice", "coconut milk", "sugar"],
        dietary_tags: &["vegetarian", "gluten-free"],
        cultural_tags: &["African"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Injera with Lentils",
        category: "breakfast",
        instructions: "Serve spongy flatbread with spiced lentils.",
        calories: 250,
        protein: 12.0,
        carbs: 45.0,
        fat: 3.0,
        ingredients: &["flour", "lentils"],
        dietary_tags: &["vegetarian"],
        cultural_tags: &["African"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Black Bean Tacos",
        category: "lunch",
        instructions: "Warm tortillas, fill with seasoned black beans and cheese.",
        calories: 340,
        protein: 15.0,
        carbs: 48.0,
        fat: 12.0,
        ingredients: &["tortillas", "black beans", "cheese"],
        dietary_tags: &["vegetarian"],
        cultural_tags: &["Hispanic"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Guacamole",
        category: "appetizer",
        instructions: "Mash avocados with lime, onion, cilantro, and salt.",
        calories: 160,
        protein: 3.0,
        carbs: 8.0,
        fat: 15.0,
        ingredients: &["avocado", "lime", "onion", "cilantro"],
        dietary_tags: &["vegan", "vegetarian", "gluten-free"],
        cultural_tags: &["Hispanic"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Horchata",
        category: "drink",
        instructions: "Blend rice, cinnamon, vanilla, and milk. Strain and chill.",
        calories: 180,
        protein: 3.0,
        carbs: 28.0,
        fat: 6.0,
        ingredients: &["rice", "cinnamon", "vanilla", "milk"],
        dietary_tags: &["vegetarian", "gluten-free"],
        cultural_tags: &["Hispanic"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Chicken Enchiladas",
        category: "dinner",
        instructions: "Roll chicken in tortillas, top with sauce and cheese, bake.",
        calories: 420,
        protein: 28.0,
        carbs: 35.0,
        fat: 18.0,
        ingredients: &["chicken breast", "tortillas", "cheese"],
        dietary_tags: &[],
        cultural_tags: &["Hispanic"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Breakfast Burrito",
        category: "breakfast",
        instructions: "Scramble eggs with beans and cheese, wrap in a tortilla.",
        calories: 380,
        protein: 18.0,
        carbs: 32.0,
        fat: 20.0,
        ingredients: &["eggs", "black beans", "cheese", "tortillas"],
        dietary_tags: &["vegetarian"],
        cultural_tags: &["Hispanic"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Flan",
        category: "dessert",
        instructions: "Bake a caramel custard until just set, then chill.",
        calories: 240,
        protein: 6.0,
        carbs: 35.0,
        fat: 9.0,
        ingredients: &["eggs", "milk", "sugar"],
        dietary_tags: &["vegetarian", "gluten-free"],
        cultural_tags: &["Hispanic"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Caesar Salad",
        category: "lunch",
        instructions: "Toss romaine lettuce with dressing and shaved cheese.",
        calories: 280,
        protein: 8.0,
        carbs: 15.0,
        fat: 22.0,
        ingredients: &["lettuce", "cheese"],
        dietary_tags: &[],
        cultural_tags: &["European"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Garlic Bread",
        category: "appetizer",
        instructions: "Spread garlic butter on bread, bake until golden.",
        calories: 220,
        protein: 6.0,
        carbs: 28.0,
        fat: 12.0,
        ingredients: &["bread", "garlic", "butter"],
        dietary_tags: &["vegetarian"],
        cultural_tags: &["European"],
        rating: Some(3),
    },
    SeedRecipe {
        title: "Iced Coffee",
        category: "drink",
        instructions: "Brew strong coffee, chill, serve over ice with milk.",
        calories: 50,
        protein: 2.0,
        carbs: 8.0,
        fat: 1.0,
        ingredients: &["coffee", "milk"],
        dietary_tags: &["vegetarian", "gluten-free"],
        cultural_tags: &["European"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Apple Pie",
        category: "dessert",
        instructions: "Bake spiced apples in a pastry crust until golden.",
        calories: 350,
        protein: 4.0,
        carbs: 52.0,
        fat: 16.0,
        ingredients: &["apple", "flour", "cinnamon"],
        dietary_tags: &["vegetarian"],
        cultural_tags: &["European"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Grilled Salmon",
        category: "dinner",
        instructions: "Season salmon with herbs, grill until flaky.",
        calories: 380,
        protein: 42.0,
        carbs: 2.0,
        fat: 18.0,
        ingredients: &["salmon", "oregano"],
        dietary_tags: &["gluten-free"],
        cultural_tags: &["European"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "English Breakfast",
        category: "breakfast",
        instructions: "Fry eggs, warm beans, toast bread, grill tomatoes.",
        calories: 420,
        protein: 22.0,
        carbs: 35.0,
        fat: 24.0,
        ingredients: &["eggs", "black beans", "bread", "tomato"],
        dietary_tags: &["vegetarian"],
        cultural_tags: &["European"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Hummus",
        category: "appetizer",
        instructions: "Blend chickpeas, lemon, and garlic until smooth.",
        calories: 180,
        protein: 8.0,
        carbs: 20.0,
        fat: 10.0,
        ingredients: &["chickpeas", "lemon", "garlic"],
        dietary_tags: &["vegan", "vegetarian", "gluten-free"],
        cultural_tags: &["Middle Eastern"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Chicken Shawarma",
        category: "lunch",
        instructions: "Marinate chicken in spices, roast and slice thin.",
        calories: 400,
        protein: 35.0,
        carbs: 15.0,
        fat: 22.0,
        ingredients: &["chicken breast", "turmeric", "cumin"],
        dietary_tags: &["gluten-free"],
        cultural_tags: &["Middle Eastern"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Baklava",
        category: "dessert",
        instructions: "Layer phyllo with nuts and honey syrup, bake until crisp.",
        calories: 280,
        protein: 6.0,
        carbs: 32.0,
        fat: 16.0,
        ingredients: &["walnuts", "honey", "flour"],
        dietary_tags: &["vegetarian"],
        cultural_tags: &["Middle Eastern"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Mint Tea",
        category: "drink",
        instructions: "Steep tea with fresh mint and sugar.",
        calories: 30,
        protein: 0.0,
        carbs: 8.0,
        fat: 0.0,
        ingredients: &["tea", "sugar"],
        dietary_tags: &["vegan", "vegetarian", "gluten-free"],
        cultural_tags: &["Middle Eastern"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Lamb Pilaf",
        category: "dinner",
        instructions: "Cook rice with lamb, onions, and warm spices.",
        calories: 450,
        protein: 25.0,
        carbs: 48.0,
        fat: 18.0,
        ingredients: &["beef", "rice", "onion"],
        dietary_tags: &["gluten-free"],
        cultural_tags: &["Middle Eastern"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Stuffed Dates",
        category: "appetizer",
        instructions: "Fill dates with nuts and cream cheese.",
        calories: 180,
        protein: 4.0,
        carbs: 28.0,
        fat: 8.0,
        ingredients: &["dates", "almonds", "cream cheese"],
        dietary_tags: &["vegetarian", "gluten-free"],
        cultural_tags: &["Middle Eastern"],
        rating: Some(4),
    },
    SeedRecipe {
        title: "Mango Lassi",
        category: "drink",
        instructions: "Blend mango and yogurt until smooth.",
        calories: 150,
        protein: 4.0,
        carbs: 28.0,
        fat: 3.0,
        ingredients: &["mango", "yogurt"],
        dietary_tags: &["vegetarian", "gluten-free"],
        cultural_tags: &["Middle Eastern"],
        rating: Some(5),
    },
    SeedRecipe {
        title: "Overnight Oats",
        category: "breakfast",
        instructions: "Soak oats in milk overnight, top with banana and honey.",
        calories: 310,
        protein: 10.0,
        carbs: 55.0,
        fat: 6.0,
        ingredients: &["oats", "milk", "banana", "honey"],
        dietary_tags: &["vegetarian"],
        cultural_tags: &["European"],
        rating: Some(4),
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();
    LoggingConfig::from_env().init()?;

    let database_url = args
        .database_url
        .unwrap_or_else(|| "sqlite:data/souschef.db".to_owned());

    let pool = database::connect(&database_url).await?;
    database::migrate(&pool).await?;

    if args.reset {
        reset_catalog(&pool).await?;
        info!("existing catalog rows deleted");
    }

    let ingredient_ids = seed_ingredients(&pool).await?;
    seed_substitutions(&pool, &ingredient_ids).await?;
    let recipe_count = seed_recipes(&pool, &ingredient_ids).await?;

    info!(
        ingredients = ingredient_ids.len(),
        recipes = recipe_count,
        "catalog seeded"
    );
    Ok(())
}

async fn reset_catalog(pool: &SqlitePool) -> Result<()> {
    // Children before parents to satisfy foreign keys
    for table in [
        "ratings",
        "recipe_ingredients",
        "recipe_dietary_tags",
        "recipe_cultural_tags",
        "substitutions",
        "recipes",
        "ingredients",
    ] {
        sqlx::query(&format!("DELETE FROM {table}")).execute(pool).await?;
    }
    Ok(())
}

async fn seed_ingredients(pool: &SqlitePool) -> Result<HashMap<String, i64>> {
    for (name, category) in INGREDIENTS {
        sqlx::query("INSERT OR IGNORE INTO ingredients (name, category) VALUES (?, ?)")
            .bind(name)
            .bind(category)
            .execute(pool)
            .await?;
    }

    let rows = sqlx::query("SELECT id, name FROM ingredients")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| (row.get::<String, _>("name"), row.get::<i64, _>("id")))
        .collect())
}

async fn seed_substitutions(pool: &SqlitePool, ids: &HashMap<String, i64>) -> Result<()> {
    for (ingredient, substitute) in SUBSTITUTIONS {
        let (Some(from), Some(to)) = (ids.get(*ingredient), ids.get(*substitute)) else {
            continue;
        };
        sqlx::query(
            "INSERT OR IGNORE INTO substitutions (ingredient_id, substitute_ingredient_id) VALUES (?, ?)",
        )
        .bind(from)
        .bind(to)
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn seed_recipes(pool: &SqlitePool, ids: &HashMap<String, i64>) -> Result<usize> {
    for recipe in RECIPES {
        let result = sqlx::query(
            r"
            INSERT INTO recipes (title, category, instructions, calories, protein, carbs, fat)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(recipe.title)
        .bind(recipe.category)
        .bind(recipe.instructions)
        .bind(recipe.calories)
        .bind(recipe.protein)
        .bind(recipe.carbs)
        .bind(recipe.fat)
        .execute(pool)
        .await?;
        let recipe_id = result.last_insert_rowid();

        for name in recipe.ingredients {
            let Some(ingredient_id) = ids.get(*name) else {
                continue;
            };
            sqlx::query(
                "INSERT OR IGNORE INTO recipe_ingredients (recipe_id, ingredient_id) VALUES (?, ?)",
            )
            .bind(recipe_id)
            .bind(ingredient_id)
            .execute(pool)
            .await?;
        }

        for tag in recipe.dietary_tags {
            sqlx::query("INSERT OR IGNORE INTO recipe_dietary_tags (recipe_id, tag) VALUES (?, ?)")
                .bind(recipe_id)
                .bind(tag)
                .execute(pool)
                .await?;
        }

        for tag in recipe.cultural_tags {
            sqlx::query("INSERT OR IGNORE INTO recipe_cultural_tags (recipe_id, tag) VALUES (?, ?)")
                .bind(recipe_id)
                .bind(tag)
                .execute(pool)
                .await?;
        }

        if let Some(rating) = recipe.rating {
            sqlx::query("INSERT OR REPLACE INTO ratings (recipe_id, rating) VALUES (?, ?)")
                .bind(recipe_id)
                .bind(rating)
                .execute(pool)
                .await?;
        }
    }

    Ok(RECIPES.len())
}
