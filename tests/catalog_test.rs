// ABOUTME: Integration tests for the recipe catalog
// ABOUTME: Covers the embedded table, lookups, and rejection of malformed catalogs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use diet_core::models::MealType;
use diet_intelligence::{CatalogError, RecipeCatalog};
use serde_json::{json, Value};
use std::collections::HashSet;

fn recipe(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "calories": 300,
        "protein": 10.0,
        "carbs": 30.0,
        "fat": 8.0,
        "fiber": 4.0,
        "ingredients": ["water"],
        "cookTimeMinutes": 10,
        "difficulty": "Easy",
        "imageRef": "img"
    })
}

fn single_diet(breakfast: Value, snacks: Value) -> String {
    json!({
        "diets": [{
            "dietType": "Test",
            "breakfast": [breakfast],
            "lunch": [recipe(2, "Lunch")],
            "dinner": [recipe(3, "Dinner")],
            "snacks": snacks
        }]
    })
    .to_string()
}

// ============================================================================
// EMBEDDED CATALOG
// ============================================================================

#[test]
fn test_embedded_catalog_shape() {
    let catalog = common::catalog();

    let diets: Vec<&str> = catalog.diet_types().collect();
    assert_eq!(
        diets,
        vec!["Vegan", "Non-Veg", "Vegetarian", "Gluten-Free", "Keto"]
    );
    assert_eq!(catalog.recipe_count(), 36);

    let sizes = |diet: &str| -> Vec<usize> {
        MealType::ALL
            .iter()
            .map(|meal| catalog.recipes_for(diet, *meal).len())
            .collect()
    };
    assert_eq!(sizes("Vegan"), vec![4, 3, 2, 2]);
    assert_eq!(sizes("Non-Veg"), vec![3, 3, 2, 2]);
    assert_eq!(sizes("Vegetarian"), vec![2, 2, 1, 1]);
    assert_eq!(sizes("Gluten-Free"), vec![1, 1, 1, 1]);
    assert_eq!(sizes("Keto"), vec![2, 1, 1, 1]);
}

#[test]
fn test_embedded_ids_are_unique_and_sequential() {
    let catalog = common::catalog();
    let mut ids = HashSet::new();
    for diet in catalog.diet_types() {
        for meal in MealType::ALL {
            for recipe in catalog.recipes_for(diet, meal) {
                assert!(ids.insert(recipe.id), "duplicate id {}", recipe.id);
                assert!(recipe.calories > 0);
                assert!(!recipe.ingredients.is_empty());
            }
        }
    }
    assert_eq!(ids, (1..=36).collect::<HashSet<u32>>());
}

// ============================================================================
// LOOKUPS
// ============================================================================

#[test]
fn test_recipes_for_is_case_sensitive() {
    let catalog = common::catalog();
    assert_eq!(catalog.recipes_for("Vegan", MealType::Breakfast).len(), 4);
    assert!(catalog.recipes_for("vegan", MealType::Breakfast).is_empty());
    assert!(catalog.recipes_for("Paleo", MealType::Lunch).is_empty());
}

#[test]
fn test_recipes_for_name_accepts_catalog_keys_only() {
    let catalog = common::catalog();
    assert_eq!(catalog.recipes_for_name("Keto", "breakfast").len(), 2);
    assert_eq!(catalog.recipes_for_name("Keto", "snacks")[0].name, "Keto Fat Bombs");
    assert!(catalog.recipes_for_name("Keto", "snack").is_empty());
    assert!(catalog.recipes_for_name("Keto", "Breakfast").is_empty());
}

#[test]
fn test_find_recipe_reports_location() {
    let catalog = common::catalog();

    let location = catalog.find_recipe(26).unwrap();
    assert_eq!(location.diet_type, "Vegetarian");
    assert_eq!(location.meal_type, MealType::Dinner);
    assert_eq!(location.recipe.name, "Eggplant Parmesan");
    assert_eq!(location.recipe.calories, 380);

    assert!(catalog.find_recipe(0).is_none());
    assert!(catalog.find_recipe(37).is_none());
}

#[test]
fn test_diet_returns_all_buckets() {
    let catalog = common::catalog();
    let gluten_free = catalog.diet("Gluten-Free").unwrap();
    assert_eq!(gluten_free.breakfast[0].id, 28);
    assert_eq!(gluten_free.lunch[0].id, 29);
    assert_eq!(gluten_free.dinner[0].id, 30);
    assert_eq!(gluten_free.snacks[0].id, 31);
    assert!(catalog.diet("Mediterranean").is_none());
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_valid_custom_catalog_loads() {
    let document = single_diet(recipe(1, "Oats"), json!([recipe(4, "Nuts")]));
    let catalog = RecipeCatalog::from_json(&document).unwrap();
    assert_eq!(catalog.recipe_count(), 4);
}

#[test]
fn test_rejects_empty_bucket() {
    let document = single_diet(recipe(1, "Oats"), json!([]));
    let error = RecipeCatalog::from_json(&document).unwrap_err();
    assert!(matches!(
        error,
        CatalogError::EmptyBucket { ref diet_type, meal_type: MealType::Snacks } if diet_type == "Test"
    ));
}

#[test]
fn test_rejects_duplicate_ids() {
    let document = single_diet(recipe(2, "Oats"), json!([recipe(4, "Nuts")]));
    let error = RecipeCatalog::from_json(&document).unwrap_err();
    assert!(matches!(error, CatalogError::DuplicateRecipeId(2)));
}

#[test]
fn test_rejects_blank_name_and_negative_macros() {
    let document = single_diet(recipe(1, "   "), json!([recipe(4, "Nuts")]));
    assert!(matches!(
        RecipeCatalog::from_json(&document).unwrap_err(),
        CatalogError::InvalidRecipe { id: 1, .. }
    ));

    let mut bad_macros = recipe(1, "Oats");
    bad_macros["fat"] = json!(-1.0);
    let document = single_diet(bad_macros, json!([recipe(4, "Nuts")]));
    assert!(matches!(
        RecipeCatalog::from_json(&document).unwrap_err(),
        CatalogError::InvalidRecipe { id: 1, .. }
    ));
}

#[test]
fn test_rejects_oversized_recipe_calories() {
    let mut huge = recipe(1, "Feast");
    huge["calories"] = json!(4_000_000_000_u32);
    let document = single_diet(huge, json!([recipe(4, "Nuts")]));
    assert!(matches!(
        RecipeCatalog::from_json(&document).unwrap_err(),
        CatalogError::InvalidRecipe { id: 1, reason } if reason.contains("calories")
    ));

    let mut hearty = recipe(1, "Hearty Stew");
    hearty["calories"] = json!(5000);
    let document = single_diet(hearty, json!([recipe(4, "Nuts")]));
    assert!(RecipeCatalog::from_json(&document).is_ok());
}

#[test]
fn test_rejects_malformed_documents() {
    assert!(matches!(
        RecipeCatalog::from_json("{\"diets\": []}").unwrap_err(),
        CatalogError::Empty
    ));
    assert!(matches!(
        RecipeCatalog::from_json("not json").unwrap_err(),
        CatalogError::Parse(_)
    ));
}
