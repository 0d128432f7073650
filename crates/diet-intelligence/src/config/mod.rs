// ABOUTME: Configuration module for the diet-intelligence crate
// ABOUTME: PlannerConfig groups allocation, goal, normalizer, and generator settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration
//!
//! `PlannerConfig::default()` reproduces the documented constants. `load()`
//! layers environment overrides on top and validates the result; the server
//! calls it once at startup and passes the value to every engine call.

/// Configuration error types
pub mod error;
/// Goal calculator configuration
pub mod goals;
/// Meal allocation, normalizer, and generator configuration
pub mod meals;

pub use error::ConfigError;
pub use goals::{BmrConfig, DietAdjustment, GoalConfig, GoalDefaultsConfig};
pub use meals::{MealAllocationConfig, NormalizerConfig, PlanGeneratorConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Calorie share per meal slot
    pub allocation: MealAllocationConfig,
    /// Goal calculator settings
    pub goals: GoalConfig,
    /// Plan normalizer defaults
    pub normalizer: NormalizerConfig,
    /// Catalog plan generator settings
    pub generator: PlanGeneratorConfig,
}

impl PlannerConfig {
    /// Load defaults, apply environment overrides, and validate
    ///
    /// Reads `DIET_TARGET_BMI`, `DIET_MIN_DAILY_CALORIES`, `DIET_MAX_DAILY_CALORIES`,
    /// `DIET_MIN_ITEM_CALORIES`, and `DIET_SNACKS_PER_DAY`.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.allocation.validate()?;
        self.goals.validate()?;
        self.normalizer.validate()?;
        self.generator.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("DIET_TARGET_BMI", &mut self.goals.target_bmi)?;
        Self::apply_env_var(
            "DIET_MIN_DAILY_CALORIES",
            &mut self.goals.min_daily_calories,
        )?;
        Self::apply_env_var(
            "DIET_MAX_DAILY_CALORIES",
            &mut self.goals.max_daily_calories,
        )?;
        Self::apply_env_var(
            "DIET_MIN_ITEM_CALORIES",
            &mut self.normalizer.min_item_calories,
        )?;
        Self::apply_env_var("DIET_SNACKS_PER_DAY", &mut self.generator.snack_picks)?;
        Ok(self)
    }
}
