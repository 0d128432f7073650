// ABOUTME: Repairs arbitrary candidate plan JSON into a guaranteed well-formed plan
// ABOUTME: Each field is repaired independently; nothing in the input can make it fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Normalizer
//!
//! Takes whatever a generative model (or any other untrusted source) returned
//! and produces a [`NormalizedPlan`]:
//!
//! - breakfast/lunch/dinner: a non-blank string `name` is kept (trimmed),
//!   otherwise the neutral default dish is used. A numeric `calories` value
//!   (JSON number or numeric string) is rounded and floored at 40; anything
//!   else becomes the slot's share of the calorie target.
//! - snacks: a non-empty array is repaired entry by entry (default name
//!   "Snack", default calories the snack share). Anything else becomes one
//!   default snack.
//! - `totalCalories` is always recomputed from the repaired items.

use crate::config::{MealAllocationConfig, NormalizerConfig};
use diet_core::coerce;
use diet_core::models::{MealType, NormalizedPlan, PlanItem};
use serde_json::Value;

/// Normalize a candidate plan against a daily calorie target
#[must_use]
pub fn normalize(
    candidate: Option<&Value>,
    calorie_target: u32,
    allocation: &MealAllocationConfig,
    config: &NormalizerConfig,
) -> NormalizedPlan {
    let slot = |meal_type: MealType| {
        let entry = candidate.and_then(|plan| plan.get(meal_type.as_str()));
        repair_item(
            entry,
            config.default_name(meal_type),
            allocation.portion(meal_type, calorie_target),
            config.min_item_calories,
        )
    };

    let snack_calories = allocation.portion(MealType::Snacks, calorie_target);
    let snacks = candidate
        .and_then(|plan| plan.get(MealType::Snacks.as_str()))
        .and_then(Value::as_array)
        .filter(|entries| !entries.is_empty())
        .map_or_else(
            || vec![PlanItem::new(config.snack_list_name.as_str(), snack_calories)],
            |entries| {
                entries
                    .iter()
                    .map(|entry| {
                        repair_item(
                            Some(entry),
                            &config.snack_entry_name,
                            snack_calories,
                            config.min_item_calories,
                        )
                    })
                    .collect()
            },
        );

    NormalizedPlan::new(
        slot(MealType::Breakfast),
        slot(MealType::Lunch),
        slot(MealType::Dinner),
        snacks,
    )
}

/// Accept a candidate calorie value: rounded, floored at `min_item_calories`
#[must_use]
pub fn accept_calories(value: &Value, min_item_calories: u32) -> Option<u32> {
    coerce::number(value).map(|calories| calories.round().max(f64::from(min_item_calories)) as u32)
}

fn repair_item(
    entry: Option<&Value>,
    default_name: &str,
    default_calories: u32,
    min_item_calories: u32,
) -> PlanItem {
    let name = entry
        .and_then(|item| item.get("name"))
        .and_then(coerce::non_empty_str)
        .unwrap_or(default_name);
    let calories = entry
        .and_then(|item| item.get("calories"))
        .and_then(|value| accept_calories(value, min_item_calories))
        .unwrap_or(default_calories);

    PlanItem::new(name, calories)
}
