// ABOUTME: Meal plan service for catalog plans and model-assisted one-day plans
// ABOUTME: AI plans are normalized when the model answers and synthesized locally otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_core::coerce;
use diet_core::constants::{calories, goals};
use diet_core::models::{DailyPlan, NormalizedPlan, WeeklyPlan};
use diet_intelligence::{
    fallback_plan, generate_daily, generate_weekly, normalize, PlannerConfig, RecipeCatalog,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::{ask_model, SuggestionSource};
use crate::llm::prompts::{meal_plan_prompt, PlanPrompt};
use crate::llm::LlmProvider;
use crate::resources::ServerResources;

/// Catalog plan horizon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    /// One day
    #[default]
    Daily,
    /// Monday through Sunday
    Weekly,
}

/// A generated catalog plan
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GeneratedPlan {
    /// Single day
    Daily(DailyPlan),
    /// Seven days keyed by weekday name
    Weekly(WeeklyPlan),
}

/// AI plan request after lenient parsing
#[derive(Debug, Clone, PartialEq)]
pub struct AiPlanRequest {
    /// Diet preference text; defaults to Vegan
    pub diet_preference: String,
    /// Daily limit within [1000, 3500]
    pub calorie_limit: u32,
    /// Optional BMI context for the model
    pub bmi: Option<f64>,
    /// Optional goal weight context for the model
    pub goal_weight_kg: Option<f64>,
}

impl AiPlanRequest {
    /// Parse a request body; numbers may be JSON numbers or numeric strings
    ///
    /// A missing, zero or non-numeric `calorieLimit` uses `default_limit`.
    /// The result is always clamped to the daily calorie bounds.
    #[must_use]
    pub fn from_json(body: &Value, default_limit: u32) -> Self {
        let number = |key: &str| body.get(key).and_then(coerce::number);

        let limit = number("calorieLimit")
            .filter(|value| *value != 0.0)
            .unwrap_or_else(|| f64::from(default_limit))
            .round()
            .clamp(
                f64::from(calories::MIN_DAILY_CALORIES),
                f64::from(calories::MAX_DAILY_CALORIES),
            );

        Self {
            diet_preference: body
                .get("dietPreference")
                .and_then(coerce::non_empty_str)
                .unwrap_or(goals::DEFAULT_DIET_PREFERENCE)
                .to_owned(),
            calorie_limit: limit as u32,
            bmi: number("bmi"),
            goal_weight_kg: number("goalWeightKg").or_else(|| number("goalWeight")),
        }
    }
}

/// AI plan with its provenance
#[derive(Debug, Clone, Serialize)]
pub struct PlanSuggestion {
    /// Well-formed plan
    pub plan: NormalizedPlan,
    /// Whether the model produced it
    pub source: SuggestionSource,
}

/// Meal plan operations over shared server resources
pub struct MealPlanService<'a> {
    catalog: &'a RecipeCatalog,
    planner: &'a PlannerConfig,
    llm: Option<&'a dyn LlmProvider>,
}

impl<'a> MealPlanService<'a> {
    /// Borrow what the service needs from the server resources
    #[must_use]
    pub fn new(resources: &'a ServerResources) -> Self {
        Self {
            catalog: &resources.catalog,
            planner: &resources.planner,
            llm: resources.llm.as_deref(),
        }
    }

    /// Generate a catalog plan for `diet_type`
    #[must_use]
    pub fn generate(&self, diet_type: &str, calorie_target: u32, kind: PlanKind) -> GeneratedPlan {
        let mut rng = StdRng::from_entropy();
        let config = &self.planner.generator;
        match kind {
            PlanKind::Daily => GeneratedPlan::Daily(generate_daily(
                self.catalog,
                diet_type,
                calorie_target,
                config,
                &mut rng,
            )),
            PlanKind::Weekly => GeneratedPlan::Weekly(generate_weekly(
                self.catalog,
                diet_type,
                calorie_target,
                config,
                &mut rng,
            )),
        }
    }

    /// Ask the model for a one-day plan and repair it, or synthesize one locally
    pub async fn suggest(&self, request: &AiPlanRequest) -> PlanSuggestion {
        let mut rng = StdRng::from_entropy();
        let prompt = meal_plan_prompt(
            &PlanPrompt {
                diet_preference: &request.diet_preference,
                calorie_limit: request.calorie_limit,
                bmi: request.bmi,
                goal_weight_kg: request.goal_weight_kg,
            },
            &mut rng,
        );

        let allocation = &self.planner.allocation;
        let normalizer = &self.planner.normalizer;

        if let Some(candidate) = ask_model(self.llm, &prompt, "meal_plan").await {
            let plan = normalize(Some(&candidate), request.calorie_limit, allocation, normalizer);
            info!(
                diet_preference = %request.diet_preference,
                calorie_limit = request.calorie_limit,
                total_calories = plan.total_calories(),
                "AI meal plan generated by model"
            );
            return PlanSuggestion {
                plan,
                source: SuggestionSource::Model,
            };
        }

        PlanSuggestion {
            plan: fallback_plan(
                self.catalog,
                &request.diet_preference,
                request.calorie_limit,
                allocation,
                normalizer,
                &mut rng,
            ),
            source: SuggestionSource::Fallback,
        }
    }
}
