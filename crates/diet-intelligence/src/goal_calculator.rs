// ABOUTME: Goal weight and daily calorie budget from biometric inputs
// ABOUTME: BMI-based goal weight, Mifflin-St Jeor BMR, diet nudges, and candidate reconciliation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal Calculator
//!
//! 1. Goal weight: `round(target_bmi * (height_m)^2)`, kept within [30, 300] kg.
//! 2. BMR (Mifflin-St Jeor):
//!    - male: `10*kg + 6.25*cm - 5*age + 5`
//!    - female: `10*kg + 6.25*cm - 5*age - 161`
//! 3. `daily = round(BMR * activity)` plus the first matching diet keyword nudge.
//! 4. Clamp `daily` to [1000, 3500].
//!
//! Missing, non-finite or non-positive inputs fall back to configured defaults,
//! so the calculation never fails.
//!
//! # Reference
//!
//! Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use crate::config::{BmrConfig, GoalConfig};
use diet_core::coerce;
use diet_core::models::{Gender, GoalInputs, GoalOutputs};
use serde_json::Value;

/// Keep a value only if it is finite and positive
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Inputs after defaults have been substituted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInputs {
    /// BMR gender constant selector
    pub gender: Gender,
    /// Age in years
    pub age_years: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// TDEE multiplier
    pub activity_multiplier: f64,
}

impl ResolvedInputs {
    /// Substitute configured defaults for unusable fields
    #[must_use]
    pub fn resolve(inputs: &GoalInputs, config: &GoalConfig) -> Self {
        let defaults = &config.defaults;
        Self {
            gender: inputs.gender,
            age_years: usable(inputs.age_years).unwrap_or(defaults.age_years),
            height_cm: usable(inputs.height_cm).unwrap_or(defaults.height_cm),
            weight_kg: usable(inputs.weight_kg).unwrap_or(defaults.weight_kg),
            activity_multiplier: usable(inputs.activity_multiplier)
                .unwrap_or(defaults.activity_multiplier),
        }
    }
}

/// Compute goal weight and daily calories
#[must_use]
pub fn compute_goals(inputs: &GoalInputs, config: &GoalConfig) -> GoalOutputs {
    let resolved = ResolvedInputs::resolve(inputs, config);

    let bmr = basal_metabolic_rate(&resolved, &config.bmr);
    let tdee = (bmr * resolved.activity_multiplier).round() as i64;
    let adjusted = tdee + i64::from(diet_adjustment(inputs.diet_preference.as_deref(), config));

    GoalOutputs {
        goal_weight_kg: goal_weight_kg(resolved.height_cm, config),
        daily_calories: adjusted.clamp(
            i64::from(config.min_daily_calories),
            i64::from(config.max_daily_calories),
        ) as u32,
    }
}

/// Goal weight for a height, from the target BMI
#[must_use]
pub fn goal_weight_kg(height_cm: f64, config: &GoalConfig) -> u32 {
    let height_m = height_cm / 100.0;
    let weight = (config.target_bmi * height_m * height_m).round();
    weight.clamp(
        f64::from(config.min_goal_weight_kg),
        f64::from(config.max_goal_weight_kg),
    ) as u32
}

/// Basal Metabolic Rate using Mifflin-St Jeor
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn basal_metabolic_rate(inputs: &ResolvedInputs, config: &BmrConfig) -> f64 {
    let gender_constant = match inputs.gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    config.msj_weight_coef * inputs.weight_kg
        + config.msj_height_coef * inputs.height_cm
        + config.msj_age_coef * inputs.age_years
        + gender_constant
}

/// Calorie nudge for a diet preference
///
/// Case-insensitive substring match; the first keyword in table order wins.
/// No preference, or no matching keyword, means no adjustment.
#[must_use]
pub fn diet_adjustment(diet_preference: Option<&str>, config: &GoalConfig) -> i32 {
    let Some(preference) = diet_preference else {
        return 0;
    };
    let preference = preference.to_lowercase();

    config
        .diet_adjustments
        .iter()
        .find(|adjustment| preference.contains(adjustment.keyword.as_str()))
        .map_or(0, |adjustment| adjustment.kcal)
}

/// Result of merging externally proposed goals with local ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconciledGoals {
    /// Final goals
    pub goals: GoalOutputs,
    /// The candidate goal weight was used
    pub candidate_weight_accepted: bool,
    /// The candidate daily calories were used
    pub candidate_calories_accepted: bool,
}

impl ReconciledGoals {
    /// Whether any candidate value made it into the result
    #[must_use]
    pub const fn used_candidate(&self) -> bool {
        self.candidate_weight_accepted || self.candidate_calories_accepted
    }
}

/// Prefer candidate values that are finite and within bounds, else keep local ones
///
/// The candidate is untrusted JSON. Goal weight is read from `goalWeightKg` or
/// `goalWeight`, calories from `dailyCalories`; numbers may be JSON numbers or
/// numeric strings. Accepted values are rounded to whole units.
#[must_use]
pub fn reconcile_goals(
    candidate: Option<&Value>,
    local: GoalOutputs,
    config: &GoalConfig,
) -> ReconciledGoals {
    let field = |keys: &[&str]| -> Option<f64> {
        let object = candidate?;
        keys.iter()
            .find_map(|key| object.get(*key).and_then(coerce::number))
    };
    let within = |value: f64, min: u32, max: u32| {
        (f64::from(min)..=f64::from(max))
            .contains(&value)
            .then(|| value.round() as u32)
    };

    let weight = field(&["goalWeightKg", "goalWeight"]).and_then(|value| {
        within(value, config.min_goal_weight_kg, config.max_goal_weight_kg)
    });
    let calories = field(&["dailyCalories"]).and_then(|value| {
        within(value, config.min_daily_calories, config.max_daily_calories)
    });

    ReconciledGoals {
        goals: GoalOutputs {
            goal_weight_kg: weight.unwrap_or(local.goal_weight_kg),
            daily_calories: calories.unwrap_or(local.daily_calories),
        },
        candidate_weight_accepted: weight.is_some(),
        candidate_calories_accepted: calories.is_some(),
    }
}
