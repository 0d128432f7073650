// ABOUTME: Daily and weekly meal plan generation from the recipe catalog
// ABOUTME: Empty selections become tagged zero-calorie placeholders instead of errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generator
//!
//! Draws one recipe each for breakfast, lunch and dinner and a configurable
//! number of snacks (two by default) for a diet type. A slot with nothing to
//! draw from gets a [`Placeholder`], so an unknown diet type still produces a
//! complete plan whose every slot is a placeholder and whose total is zero.
//!
//! Weekly plans are seven independent daily plans. No variety is enforced
//! across days or across slots of the same day.

use crate::catalog::RecipeCatalog;
use crate::config::PlanGeneratorConfig;
use crate::selection::{pick, EntropySource};
use diet_core::constants::picks;
use diet_core::models::{DailyPlan, MealChoice, MealType, Placeholder, WeeklyPlan};
use tracing::debug;

/// Generate one day of meals for `diet_type`
///
/// `diet_type` is matched case-sensitively against catalog keys.
pub fn generate_daily<E>(
    catalog: &RecipeCatalog,
    diet_type: &str,
    calorie_target: u32,
    config: &PlanGeneratorConfig,
    entropy: &mut E,
) -> DailyPlan
where
    E: EntropySource + ?Sized,
{
    let mut main_meal = |meal_type: MealType| {
        draw_slot(catalog, diet_type, meal_type, picks::MAIN_MEAL_PICKS, entropy)
            .into_iter()
            .next()
            .unwrap_or_else(|| MealChoice::Placeholder(Placeholder::for_slot(meal_type)))
    };
    let breakfast = main_meal(MealType::Breakfast);
    let lunch = main_meal(MealType::Lunch);
    let dinner = main_meal(MealType::Dinner);

    let mut snacks = draw_slot(
        catalog,
        diet_type,
        MealType::Snacks,
        config.snack_picks,
        entropy,
    );
    if snacks.is_empty() {
        snacks.push(MealChoice::Placeholder(Placeholder::for_slot(
            MealType::Snacks,
        )));
    }

    let plan = DailyPlan::new(breakfast, lunch, dinner, snacks, calorie_target);
    debug!(
        diet_type,
        calorie_target,
        total_calories = plan.total_calories(),
        placeholders = plan.meals().filter(|meal| meal.is_placeholder()).count(),
        "Generated daily plan"
    );
    plan
}

/// Generate seven independent daily plans, Monday through Sunday
pub fn generate_weekly<E>(
    catalog: &RecipeCatalog,
    diet_type: &str,
    calorie_target: u32,
    config: &PlanGeneratorConfig,
    entropy: &mut E,
) -> WeeklyPlan
where
    E: EntropySource + ?Sized,
{
    WeeklyPlan::from_fn(|_| generate_daily(catalog, diet_type, calorie_target, config, entropy))
}

fn draw_slot<E>(
    catalog: &RecipeCatalog,
    diet_type: &str,
    meal_type: MealType,
    count: usize,
    entropy: &mut E,
) -> Vec<MealChoice>
where
    E: EntropySource + ?Sized,
{
    pick(catalog.recipes_for(diet_type, meal_type), count, entropy)
        .into_iter()
        .map(|recipe| MealChoice::Recipe(recipe.clone()))
        .collect()
}
