// ABOUTME: Meal allocation, plan normalizer, and plan generator configuration
// ABOUTME: Allocation shares must sum to one so default plans hit the target exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use diet_core::constants::{allocation, calories, dish_names, picks};
use diet_core::models::MealType;
use serde::{Deserialize, Serialize};

/// Share of the daily calorie target for each meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealAllocationConfig {
    /// Breakfast share (0.28)
    pub breakfast: f64,
    /// Lunch share (0.34)
    pub lunch: f64,
    /// Dinner share (0.28)
    pub dinner: f64,
    /// Snacks share (0.10)
    pub snacks: f64,
}

impl Default for MealAllocationConfig {
    fn default() -> Self {
        Self {
            breakfast: allocation::BREAKFAST_SHARE,
            lunch: allocation::LUNCH_SHARE,
            dinner: allocation::DINNER_SHARE,
            snacks: allocation::SNACKS_SHARE,
        }
    }
}

impl MealAllocationConfig {
    /// Share for one slot
    #[must_use]
    pub const fn share(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snacks => self.snacks,
        }
    }

    /// `round(calorie_target * share)`
    #[must_use]
    pub fn portion(&self, meal_type: MealType, calorie_target: u32) -> u32 {
        (f64::from(calorie_target) * self.share(meal_type))
            .round()
            .max(0.0) as u32
    }

    /// Validate that every share is a fraction and the shares sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a share outside [0, 1] and
    /// `ConfigError::InvalidWeights` if the sum is off by more than the tolerance
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = MealType::ALL.map(|meal| self.share(meal));
        if shares
            .iter()
            .any(|share| !share.is_finite() || !(0.0..=1.0).contains(share))
        {
            return Err(ConfigError::ValueOutOfRange(
                "meal allocation shares must be between 0 and 1",
            ));
        }

        let sum: f64 = shares.iter().sum();
        if (sum - 1.0).abs() > allocation::SHARE_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "meal allocation shares must sum to 1.0, got {sum:.3}"
            )));
        }
        Ok(())
    }
}

/// Plan normalizer defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Floor for accepted candidate calorie values (40)
    pub min_item_calories: u32,
    /// Default breakfast dish
    pub breakfast_name: String,
    /// Default lunch dish
    pub lunch_name: String,
    /// Default dinner dish
    pub dinner_name: String,
    /// Name of the single snack substituted for a missing snack list
    pub snack_list_name: String,
    /// Name for an individual snack entry without a usable name
    pub snack_entry_name: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_item_calories: calories::MIN_ITEM_CALORIES,
            breakfast_name: dish_names::BREAKFAST.to_owned(),
            lunch_name: dish_names::LUNCH.to_owned(),
            dinner_name: dish_names::DINNER.to_owned(),
            snack_list_name: dish_names::SNACK_LIST.to_owned(),
            snack_entry_name: dish_names::SNACK_ENTRY.to_owned(),
        }
    }
}

impl NormalizerConfig {
    /// Neutral dish name for a slot
    #[must_use]
    pub fn default_name(&self, meal_type: MealType) -> &str {
        match meal_type {
            MealType::Breakfast => &self.breakfast_name,
            MealType::Lunch => &self.lunch_name,
            MealType::Dinner => &self.dinner_name,
            MealType::Snacks => &self.snack_list_name,
        }
    }

    /// Validate dish names
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any default name is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            &self.breakfast_name,
            &self.lunch_name,
            &self.dinner_name,
            &self.snack_list_name,
            &self.snack_entry_name,
        ];
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::ValueOutOfRange(
                "default dish names must not be blank",
            ));
        }
        Ok(())
    }
}

/// Catalog plan generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanGeneratorConfig {
    /// Recipes drawn for the snacks slot (2)
    pub snack_picks: usize,
}

impl Default for PlanGeneratorConfig {
    fn default() -> Self {
        Self {
            snack_picks: picks::SNACK_PICKS,
        }
    }
}

impl PlanGeneratorConfig {
    /// Validate pick counts
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if no snacks would be drawn
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snack_picks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "snack_picks must be at least 1",
            ));
        }
        Ok(())
    }
}
