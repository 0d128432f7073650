// ABOUTME: Domain services that combine the planning engine with the optional generative model
// ABOUTME: Keeps route handlers thin; every model failure degrades to a locally computed answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Goal suggestions (local calculation reconciled with model output)
pub mod goals;
/// Catalog plans and AI meal plans
pub mod meal_plan;

pub use goals::{GoalService, GoalSuggestion};
pub use meal_plan::{AiPlanRequest, GeneratedPlan, MealPlanService, PlanKind, PlanSuggestion};

use crate::llm::{extract_json_object, LlmProvider};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Where a suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    /// At least part of the answer came from the model
    Model,
    /// Computed locally
    Fallback,
}

/// Ask the model for a JSON object; `None` on any failure
async fn ask_model(llm: Option<&dyn LlmProvider>, prompt: &str, purpose: &str) -> Option<Value> {
    let Some(provider) = llm else {
        debug!(purpose, "No model provider configured, using local fallback");
        return None;
    };

    match provider.generate(prompt).await {
        Ok(reply) => {
            let parsed = extract_json_object(&reply);
            if parsed.is_none() {
                warn!(
                    provider = provider.name(),
                    purpose,
                    reply_len = reply.len(),
                    "Model reply contained no JSON object, using local fallback"
                );
            }
            parsed
        }
        Err(e) => {
            warn!(
                provider = provider.name(),
                purpose,
                error = %e,
                "Model request failed, using local fallback"
            );
            None
        }
    }
}
