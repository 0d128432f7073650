// ABOUTME: Read-only recipe catalog keyed by diet type and meal slot
// ABOUTME: Loaded once from embedded JSON and validated; lookups never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog
//!
//! Static lookup `diet type -> meal slot -> ordered recipes`. The catalog is an
//! immutable value built once at startup and passed by reference to the plan
//! generator and fallback synthesizer.
//!
//! Loading validates the whole table. A malformed table is a configuration
//! error and should abort startup. After loading, every lookup is total:
//! unknown diets and meal slots yield an empty slice.

use diet_core::constants::calories;
use diet_core::errors::{AppError, ErrorCode};
use diet_core::models::{MealType, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

/// Catalog bundled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../data/recipes.json");

/// Reasons a catalog table is rejected
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON document could not be parsed into the catalog shape
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// No diet types at all
    #[error("catalog contains no diet types")]
    Empty,

    /// Diet type name is blank or repeated
    #[error("diet type '{0}' is blank or defined more than once")]
    DuplicateDiet(String),

    /// Recipe id is reused
    #[error("recipe id {0} is used more than once")]
    DuplicateRecipeId(u32),

    /// A recipe field violates its constraints
    #[error("recipe {id} is invalid: {reason}")]
    InvalidRecipe {
        /// Offending recipe id
        id: u32,
        /// Which constraint failed
        reason: &'static str,
    },

    /// A diet has no recipes for a meal slot
    #[error("diet type '{diet_type}' has no {meal_type} recipes")]
    EmptyBucket {
        /// Diet with the gap
        diet_type: String,
        /// Empty slot
        meal_type: MealType,
    },
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        Self::new(
            ErrorCode::ConfigInvalid,
            format!("Recipe catalog rejected: {error}"),
        )
        .with_source(error)
    }
}

/// The four meal buckets of one diet type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietRecipes {
    /// Catalog key, matched case-sensitively
    pub diet_type: String,
    /// Breakfast recipes
    pub breakfast: Vec<Recipe>,
    /// Lunch recipes
    pub lunch: Vec<Recipe>,
    /// Dinner recipes
    pub dinner: Vec<Recipe>,
    /// Snack recipes
    pub snacks: Vec<Recipe>,
}

impl DietRecipes {
    /// Recipes for one slot
    #[must_use]
    pub fn bucket(&self, meal_type: MealType) -> &[Recipe] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snacks => &self.snacks,
        }
    }
}

/// A recipe together with where it lives in the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeLocation<'a> {
    /// Owning diet type
    pub diet_type: &'a str,
    /// Owning slot
    pub meal_type: MealType,
    /// The recipe
    pub recipe: &'a Recipe,
}

#[derive(Deserialize)]
struct CatalogDocument {
    diets: Vec<DietRecipes>,
}

/// Immutable recipe table
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    diets: Vec<DietRecipes>,
}

impl RecipeCatalog {
    /// Load the catalog bundled with the crate
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled table is malformed
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog document of the form `{"diets": [...]}`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if parsing or validation fails
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogDocument = serde_json::from_str(document)?;
        Self::from_diets(parsed.diets)
    }

    /// Validate and wrap an in-memory table
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the table violates any recipe or bucket constraint
    pub fn from_diets(diets: Vec<DietRecipes>) -> Result<Self, CatalogError> {
        validate(&diets)?;
        let catalog = Self { diets };
        info!(
            diet_types = catalog.diets.len(),
            recipes = catalog.recipe_count(),
            "Recipe catalog loaded"
        );
        Ok(catalog)
    }

    /// Recipes for a diet type and slot, in catalog order
    ///
    /// Unknown diet types yield an empty slice.
    #[must_use]
    pub fn recipes_for(&self, diet_type: &str, meal_type: MealType) -> &[Recipe] {
        self.diet(diet_type)
            .map(|diet| diet.bucket(meal_type))
            .unwrap_or_default()
    }

    /// Same as [`Self::recipes_for`] with the slot given as its catalog key
    ///
    /// Unrecognized slot keys yield an empty slice.
    #[must_use]
    pub fn recipes_for_name(&self, diet_type: &str, meal_type: &str) -> &[Recipe] {
        MealType::from_key(meal_type)
            .map(|meal| self.recipes_for(diet_type, meal))
            .unwrap_or_default()
    }

    /// All buckets of one diet type
    #[must_use]
    pub fn diet(&self, diet_type: &str) -> Option<&DietRecipes> {
        self.diets.iter().find(|diet| diet.diet_type == diet_type)
    }

    /// Diet type names in catalog order
    pub fn diet_types(&self) -> impl Iterator<Item = &str> {
        self.diets.iter().map(|diet| diet.diet_type.as_str())
    }

    /// Find a recipe by id anywhere in the catalog
    #[must_use]
    pub fn find_recipe(&self, id: u32) -> Option<RecipeLocation<'_>> {
        self.diets.iter().find_map(|diet| {
            MealType::ALL.into_iter().find_map(|meal_type| {
                diet.bucket(meal_type)
                    .iter()
                    .find(|recipe| recipe.id == id)
                    .map(|recipe| RecipeLocation {
                        diet_type: &diet.diet_type,
                        meal_type,
                        recipe,
                    })
            })
        })
    }

    /// Total number of recipes
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.diets
            .iter()
            .map(|diet| {
                MealType::ALL
                    .iter()
                    .map(|meal| diet.bucket(*meal).len())
                    .sum::<usize>()
            })
            .sum()
    }
}

fn validate(diets: &[DietRecipes]) -> Result<(), CatalogError> {
    if diets.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut diet_names = HashSet::new();
    let mut recipe_ids = HashSet::new();

    for diet in diets {
        if diet.diet_type.trim().is_empty() || !diet_names.insert(diet.diet_type.as_str()) {
            return Err(CatalogError::DuplicateDiet(diet.diet_type.clone()));
        }

        for meal_type in MealType::ALL {
            let bucket = diet.bucket(meal_type);
            if bucket.is_empty() {
                return Err(CatalogError::EmptyBucket {
                    diet_type: diet.diet_type.clone(),
                    meal_type,
                });
            }
            for recipe in bucket {
                validate_recipe(recipe)?;
                if !recipe_ids.insert(recipe.id) {
                    return Err(CatalogError::DuplicateRecipeId(recipe.id));
                }
            }
        }
    }
    Ok(())
}

fn validate_recipe(recipe: &Recipe) -> Result<(), CatalogError> {
    let invalid = |reason| CatalogError::InvalidRecipe {
        id: recipe.id,
        reason,
    };

    if recipe.id == 0 {
        return Err(invalid("id must be positive"));
    }
    if recipe.name.trim().is_empty() {
        return Err(invalid("name is blank"));
    }
    if recipe.calories > calories::MAX_RECIPE_CALORIES {
        return Err(invalid("calories exceed the per-recipe maximum"));
    }
    if recipe.cook_time_minutes == 0 {
        return Err(invalid("cook time must be positive"));
    }
    let macros = [recipe.protein, recipe.carbs, recipe.fat, recipe.fiber];
    if macros.iter().any(|grams| !grams.is_finite() || *grams < 0.0) {
        return Err(invalid("nutrition values must be finite and non-negative"));
    }
    Ok(())
}
