// ABOUTME: Goal calculator configuration: target BMI, bounds, defaults, BMR coefficients
// ABOUTME: Diet-preference calorie adjustments are an ordered keyword table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use super::error::ConfigError;
use diet_core::constants::{calories, goals};
use serde::{Deserialize, Serialize};

/// Goal calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Body mass index used to infer goal weight (22.5)
    pub target_bmi: f64,
    /// Lowest goal weight in kg (30)
    pub min_goal_weight_kg: u32,
    /// Highest goal weight in kg (300)
    pub max_goal_weight_kg: u32,
    /// Lowest daily calorie budget (1000)
    pub min_daily_calories: u32,
    /// Highest daily calorie budget (3500)
    pub max_daily_calories: u32,
    /// Substitutes for missing or invalid inputs
    pub defaults: GoalDefaultsConfig,
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Ordered keyword adjustments; the first keyword found in the preference wins
    pub diet_adjustments: Vec<DietAdjustment>,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            target_bmi: goals::TARGET_BMI,
            min_goal_weight_kg: goals::MIN_GOAL_WEIGHT_KG,
            max_goal_weight_kg: goals::MAX_GOAL_WEIGHT_KG,
            min_daily_calories: calories::MIN_DAILY_CALORIES,
            max_daily_calories: calories::MAX_DAILY_CALORIES,
            defaults: GoalDefaultsConfig::default(),
            bmr: BmrConfig::default(),
            diet_adjustments: DietAdjustment::default_table(),
        }
    }
}

impl GoalConfig {
    /// Validate bounds and defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a range is inverted or a default is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_bmi.is_finite() && self.target_bmi > 0.0) {
            return Err(ConfigError::ValueOutOfRange("target_bmi must be positive"));
        }
        if self.min_goal_weight_kg >= self.max_goal_weight_kg {
            return Err(ConfigError::InvalidRange(
                "min_goal_weight_kg must be below max_goal_weight_kg",
            ));
        }
        if self.min_daily_calories >= self.max_daily_calories {
            return Err(ConfigError::InvalidRange(
                "min_daily_calories must be below max_daily_calories",
            ));
        }
        self.defaults.validate()
    }
}

/// Values used when an input is missing, non-finite or not positive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDefaultsConfig {
    /// 170 cm
    pub height_cm: f64,
    /// 25 years
    pub age_years: f64,
    /// 70 kg
    pub weight_kg: f64,
    /// 1.2 (sedentary)
    pub activity_multiplier: f64,
}

impl Default for GoalDefaultsConfig {
    fn default() -> Self {
        Self {
            height_cm: goals::DEFAULT_HEIGHT_CM,
            age_years: goals::DEFAULT_AGE_YEARS,
            weight_kg: goals::DEFAULT_WEIGHT_KG,
            activity_multiplier: goals::DEFAULT_ACTIVITY_MULTIPLIER,
        }
    }
}

impl GoalDefaultsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let all_positive = [
            self.height_cm,
            self.age_years,
            self.weight_kg,
            self.activity_multiplier,
        ]
        .iter()
        .all(|value| value.is_finite() && *value > 0.0);

        if all_positive {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "goal input defaults must be finite and positive",
            ))
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Flat kcal nudge applied when the diet preference contains `keyword`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietAdjustment {
    /// Lowercase keyword searched for in the lowercased preference
    pub keyword: String,
    /// Signed calorie adjustment
    pub kcal: i32,
}

impl DietAdjustment {
    fn new(keyword: &str, kcal: i32) -> Self {
        Self {
            keyword: keyword.to_owned(),
            kcal,
        }
    }

    /// keto, vegan, vegetarian, non, gluten, in precedence order
    #[must_use]
    pub fn default_table() -> Vec<Self> {
        vec![
            Self::new("keto", -200),
            Self::new("vegan", -100),
            Self::new("vegetarian", 50),
            Self::new("non", 100),
            Self::new("gluten", -50),
        ]
    }
}
