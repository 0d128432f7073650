// ABOUTME: Local plan synthesis used when the generative model gives nothing usable
// ABOUTME: Dish names come from the catalog; calories follow the meal allocation shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fallback plan synthesis.
//!
//! Picks one random recipe name per slot (a single snack) from the requested
//! diet, or from the Vegan diet when the preference is not a catalog key.
//! Calories are the slot's share of the limit, floored like accepted
//! candidate values.

use crate::catalog::RecipeCatalog;
use crate::config::{MealAllocationConfig, NormalizerConfig};
use crate::selection::{pick_one, EntropySource};
use diet_core::constants::catalog::FALLBACK_DIET;
use diet_core::models::{MealType, NormalizedPlan, PlanItem};
use tracing::debug;

/// Build a plan without any external help
pub fn fallback_plan<E>(
    catalog: &RecipeCatalog,
    diet_preference: &str,
    calorie_limit: u32,
    allocation: &MealAllocationConfig,
    config: &NormalizerConfig,
    entropy: &mut E,
) -> NormalizedPlan
where
    E: EntropySource + ?Sized,
{
    let diet_type = if catalog.diet(diet_preference).is_some() {
        diet_preference
    } else {
        debug!(diet_preference, fallback = FALLBACK_DIET, "Unknown diet for fallback plan");
        FALLBACK_DIET
    };

    let mut item = |meal_type: MealType| {
        let name = pick_one(catalog.recipes_for(diet_type, meal_type), entropy)
            .map_or_else(|| config.default_name(meal_type), |recipe| recipe.name.as_str());
        let calories = allocation
            .portion(meal_type, calorie_limit)
            .max(config.min_item_calories);
        PlanItem::new(name, calories)
    };

    let breakfast = item(MealType::Breakfast);
    let lunch = item(MealType::Lunch);
    let dinner = item(MealType::Dinner);
    let snack = item(MealType::Snacks);

    NormalizedPlan::new(breakfast, lunch, dinner, vec![snack])
}
