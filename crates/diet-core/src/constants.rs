// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default calorie limits, meal allocation shares, and fixed dish names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Engine configuration structs take
//! their defaults from here so the numbers live in one place.

/// Daily calorie bounds and request defaults
pub mod calories {
    /// Lowest daily calorie budget the engine will recommend or accept for AI plans
    pub const MIN_DAILY_CALORIES: u32 = 1000;
    /// Highest daily calorie budget the engine will recommend or accept for AI plans
    pub const MAX_DAILY_CALORIES: u32 = 3500;
    /// Calorie target used by the catalog plan endpoints when none is supplied
    pub const DEFAULT_PLAN_TARGET: u32 = 1600;
    /// Calorie limit used by the AI plan endpoint when none is supplied
    pub const DEFAULT_AI_PLAN_LIMIT: u32 = 1800;
    /// Floor applied to any accepted per-item calorie value
    pub const MIN_ITEM_CALORIES: u32 = 40;
    /// Largest calorie value a single catalog recipe may carry
    pub const MAX_RECIPE_CALORIES: u32 = 5000;
}

/// Share of the daily calorie target assigned to each meal slot
pub mod allocation {
    /// Breakfast share
    pub const BREAKFAST_SHARE: f64 = 0.28;
    /// Lunch share
    pub const LUNCH_SHARE: f64 = 0.34;
    /// Dinner share
    pub const DINNER_SHARE: f64 = 0.28;
    /// Snacks share
    pub const SNACKS_SHARE: f64 = 0.10;
    /// Allowed deviation of the share sum from 1.0
    pub const SHARE_SUM_TOLERANCE: f64 = 0.001;
}

/// Goal calculation constants
pub mod goals {
    /// Body mass index used to infer a goal weight
    pub const TARGET_BMI: f64 = 22.5;
    /// Minimum goal weight in kilograms
    pub const MIN_GOAL_WEIGHT_KG: u32 = 30;
    /// Maximum goal weight in kilograms
    pub const MAX_GOAL_WEIGHT_KG: u32 = 300;
    /// Height used when the input is missing or invalid
    pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
    /// Age used when the input is missing or invalid
    pub const DEFAULT_AGE_YEARS: f64 = 25.0;
    /// Weight used when the input is missing or invalid
    pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
    /// Sedentary activity multiplier
    pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;
    /// Diet preference assumed by the AI goal endpoint
    pub const DEFAULT_DIET_PREFERENCE: &str = "Vegan";
}

/// Neutral dish names used when plan data is missing
pub mod dish_names {
    /// Default breakfast
    pub const BREAKFAST: &str = "Oatmeal with Berries";
    /// Default lunch
    pub const LUNCH: &str = "Grain Bowl with Beans and Veg";
    /// Default dinner
    pub const DINNER: &str = "Tofu/Paneer Stir-Fry with Veg";
    /// Default snack used when the whole snack list is missing
    pub const SNACK_LIST: &str = "Fruit and Nuts";
    /// Default name for a single snack entry with no usable name
    pub const SNACK_ENTRY: &str = "Snack";
}

/// Plan generator pick counts
pub mod picks {
    /// Recipes drawn for breakfast, lunch and dinner
    pub const MAIN_MEAL_PICKS: usize = 1;
    /// Recipes drawn for the snacks slot
    pub const SNACK_PICKS: usize = 2;
}

/// Catalog constants
pub mod catalog {
    /// Diet used by the fallback plan when the requested diet is unknown
    pub const FALLBACK_DIET: &str = "Vegan";
}

/// Service names for structured logging
pub mod service_names {
    /// Server binary service name
    pub const DIET_PLANNER_SERVER: &str = "diet-planner-server";
}
