// ABOUTME: Recipe, meal slot, and placeholder models for the recipe catalog
// ABOUTME: MealChoice tags real recipes apart from zero-calorie placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Preparation difficulty of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Minimal preparation
    Easy,
    /// Some cooking skill required
    Medium,
    /// Involved preparation
    Hard,
}

/// One of the four fixed meal slots of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Snacks between meals (may hold several picks)
    Snacks,
}

impl MealType {
    /// All meal slots in day order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Catalog key for this slot
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }

    /// Parse a catalog key. Matching is exact; anything else is `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meal| meal.as_str() == key)
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable catalog recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique positive identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
    /// Ordered ingredient list
    pub ingredients: Vec<String>,
    /// Preparation time
    pub cook_time_minutes: u32,
    /// Preparation difficulty
    pub difficulty: Difficulty,
    /// Opaque image reference
    pub image_ref: String,
}

/// Zero-calorie stand-in used when a slot has no recipe
///
/// Carries the nutrition fields of a [`Recipe`] so totals and display code
/// treat both the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    /// Slot this placeholder fills
    pub meal_type: MealType,
    /// "No <slot> available"
    pub name: String,
    /// Always 0
    pub calories: u32,
    /// Always 0
    pub protein: f64,
    /// Always 0
    pub carbs: f64,
    /// Always 0
    pub fat: f64,
    /// Always 0
    pub fiber: f64,
    /// Always empty
    pub ingredients: Vec<String>,
}

impl Placeholder {
    /// Build the placeholder for an empty slot
    #[must_use]
    pub fn for_slot(meal_type: MealType) -> Self {
        Self {
            meal_type,
            name: format!("No {meal_type} available"),
            calories: 0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
            ingredients: Vec::new(),
        }
    }
}

/// Content of a plan slot: a real recipe or a placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MealChoice {
    /// Recipe drawn from the catalog
    Recipe(Recipe),
    /// Nothing available for this slot
    Placeholder(Placeholder),
}

impl MealChoice {
    /// Display name of the slot content
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Recipe(recipe) => &recipe.name,
            Self::Placeholder(placeholder) => &placeholder.name,
        }
    }

    /// Calories contributed to the day total
    #[must_use]
    pub const fn calories(&self) -> u32 {
        match self {
            Self::Recipe(recipe) => recipe.calories,
            Self::Placeholder(placeholder) => placeholder.calories,
        }
    }

    /// Whether this slot holds a placeholder
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// The recipe, if this slot holds one
    #[must_use]
    pub const fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Recipe(recipe) => Some(recipe),
            Self::Placeholder(_) => None,
        }
    }
}
