// ABOUTME: Goal service computing local goals and reconciling them with model suggestions
// ABOUTME: Model values are only used when they fall inside the configured bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_core::constants::goals::DEFAULT_DIET_PREFERENCE;
use diet_core::models::{GoalInputs, GoalOutputs};
use diet_intelligence::goal_calculator::ResolvedInputs;
use diet_intelligence::{compute_goals, reconcile_goals, PlannerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, warn};

use super::{ask_model, SuggestionSource};
use crate::llm::prompts::{goal_prompt, GoalPrompt};
use crate::llm::LlmProvider;
use crate::resources::ServerResources;

/// Goals with their provenance
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSuggestion {
    /// Final goals
    #[serde(flatten)]
    pub goals: GoalOutputs,
    /// `model` when at least one model value was accepted
    pub source: SuggestionSource,
}

/// Goal operations over shared server resources
pub struct GoalService<'a> {
    planner: &'a PlannerConfig,
    llm: Option<&'a dyn LlmProvider>,
}

impl<'a> GoalService<'a> {
    /// Borrow what the service needs from the server resources
    #[must_use]
    pub fn new(resources: &'a ServerResources) -> Self {
        Self {
            planner: &resources.planner,
            llm: resources.llm.as_deref(),
        }
    }

    /// Local calculation only
    #[must_use]
    pub fn compute(&self, inputs: &GoalInputs) -> GoalOutputs {
        compute_goals(inputs, &self.planner.goals)
    }

    /// Local goals, overridden field by field by valid model suggestions
    ///
    /// A missing diet preference is treated as Vegan for both the local
    /// adjustment and the prompt.
    pub async fn suggest(&self, inputs: &GoalInputs) -> GoalSuggestion {
        let config = &self.planner.goals;
        let mut inputs = inputs.clone();
        let diet_preference = inputs
            .diet_preference
            .get_or_insert_with(|| DEFAULT_DIET_PREFERENCE.to_owned())
            .clone();

        let local = compute_goals(&inputs, config);
        let prompt = goal_prompt(
            &GoalPrompt {
                inputs: ResolvedInputs::resolve(&inputs, config),
                diet_preference: &diet_preference,
                bmi: inputs.bmi,
            },
            &mut StdRng::from_entropy(),
        );

        let candidate = ask_model(self.llm, &prompt, "goals").await;
        let reconciled = reconcile_goals(candidate.as_ref(), local, config);

        if candidate.is_some() && !reconciled.used_candidate() {
            warn!(
                diet_preference = %diet_preference,
                "Model goal values were out of range, using local calculation"
            );
        }
        info!(
            goal_weight_kg = reconciled.goals.goal_weight_kg,
            daily_calories = reconciled.goals.daily_calories,
            from_model = reconciled.used_candidate(),
            "Goals suggested"
        );

        GoalSuggestion {
            goals: reconciled.goals,
            source: if reconciled.used_candidate() {
                SuggestionSource::Model
            } else {
                SuggestionSource::Fallback
            },
        }
    }
}
