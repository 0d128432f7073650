// ABOUTME: Model-assisted meal plan and goal endpoints
// ABOUTME: Always answer 200; model failures are logged and replaced by local results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use diet_core::models::GoalInputs;

use super::lenient_json;
use crate::resources::ServerResources;
use crate::services::{AiPlanRequest, GoalService, MealPlanService};

/// AI routes implementation
pub struct AiRoutes;

impl AiRoutes {
    /// `/ai-meal-plan` and `/ai-goals`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/ai-meal-plan", post(Self::handle_meal_plan))
            .route("/ai-goals", post(Self::handle_goals))
            .with_state(resources)
    }

    /// Handle POST /ai-meal-plan
    async fn handle_meal_plan(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Response {
        let request = AiPlanRequest::from_json(
            &lenient_json(&body),
            resources.config.ai_default_calorie_limit,
        );
        let suggestion = MealPlanService::new(&resources).suggest(&request).await;
        (StatusCode::OK, Json(suggestion)).into_response()
    }

    /// Handle POST /ai-goals
    async fn handle_goals(State(resources): State<Arc<ServerResources>>, body: Bytes) -> Response {
        let inputs = GoalInputs::from_json(&lenient_json(&body));
        let suggestion = GoalService::new(&resources).suggest(&inputs).await;
        (StatusCode::OK, Json(suggestion)).into_response()
    }
}
