// ABOUTME: Biometric goal inputs and computed weight/calorie goals
// ABOUTME: Lenient JSON parsing treats unusable values as missing rather than failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::coerce;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gender used by the BMR formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Female constant (-161); used for anything that is not "male"
    #[default]
    Female,
}

impl Gender {
    /// Interpret free-form text: "male" in any case is male, everything else female
    #[must_use]
    pub fn from_input(text: &str) -> Self {
        if text.eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// Biometric and activity inputs for goal computation
///
/// Numeric fields are optional; the goal calculator substitutes defaults for
/// missing, non-finite or non-positive values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInputs {
    /// BMR gender constant selector
    pub gender: Gender,
    /// Age in years
    pub age_years: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// TDEE multiplier (1.2 sedentary)
    pub activity_multiplier: Option<f64>,
    /// Free-form diet preference text
    pub diet_preference: Option<String>,
    /// Informational body mass index
    pub bmi: Option<f64>,
}

impl GoalInputs {
    /// Parse a request body the way browsers send it: numbers may arrive as
    /// strings, and unknown or malformed fields are ignored.
    ///
    /// Accepts `age` or `ageYears`, and `activity` or `activityMultiplier`.
    #[must_use]
    pub fn from_json(body: &Value) -> Self {
        let number = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| body.get(*key).and_then(coerce::number))
        };

        Self {
            gender: body
                .get("gender")
                .and_then(Value::as_str)
                .map_or(Gender::Female, Gender::from_input),
            age_years: number(&["ageYears", "age"]),
            height_cm: number(&["heightCm"]),
            weight_kg: number(&["weightKg"]),
            activity_multiplier: number(&["activityMultiplier", "activity"]),
            diet_preference: body
                .get("dietPreference")
                .and_then(coerce::non_empty_str)
                .map(str::to_owned),
            bmi: number(&["bmi"]),
        }
    }
}

/// Computed goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOutputs {
    /// Goal body weight, within [30, 300]
    pub goal_weight_kg: u32,
    /// Daily calorie budget, within [1000, 3500]
    pub daily_calories: u32,
}
