// ABOUTME: Catalog meal plan and local goal endpoints
// ABOUTME: Validates request bodies and delegates to the meal plan and goal services
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
use diet_core::coerce;
use diet_core::errors::AppError;
use diet_core::models::GoalInputs;
use serde::Serialize;
use serde_json::{json, Value};

use super::lenient_json;
use crate::resources::ServerResources;
use crate::services::{GeneratedPlan, GoalService, MealPlanService, PlanKind};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MealPlanResponse<'a> {
    success: bool,
    diet_type: &'a str,
    plan_type: &'static str,
    plan: GeneratedPlan,
}

/// Plan and goal routes implementation
pub struct PlanRoutes;

impl PlanRoutes {
    /// Catalog plan and local goal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/meal-plan", post(Self::handle_meal_plan))
            .route("/api/goals", post(Self::handle_goals))
            .with_state(resources)
    }

    fn calorie_target(body: &Value, default_target: u32) -> Result<u32, AppError> {
        match body.get("calorieTarget") {
            None | Some(Value::Null) => Ok(default_target),
            Some(raw) => coerce::positive_number(raw)
                .map(|target| target.round().max(1.0) as u32)
                .ok_or_else(|| {
                    AppError::invalid_input("calorieTarget must be a positive number")
                        .with_details(json!({ "calorieTarget": raw }))
                }),
        }
    }

    fn plan_kind(body: &Value) -> Result<PlanKind, AppError> {
        match body.get("planType").and_then(coerce::non_empty_str) {
            None => Ok(PlanKind::Daily),
            Some(text) if text.eq_ignore_ascii_case("daily") => Ok(PlanKind::Daily),
            Some(text) if text.eq_ignore_ascii_case("weekly") => Ok(PlanKind::Weekly),
            Some(text) => Err(AppError::invalid_input(format!(
                "planType must be 'daily' or 'weekly', got '{text}'"
            ))),
        }
    }

    /// Handle POST /api/meal-plan
    async fn handle_meal_plan(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let body = lenient_json(&body);
        let diet_type = body
            .get("dietType")
            .and_then(coerce::non_empty_str)
            .ok_or_else(|| AppError::invalid_input("dietType is required"))?;
        let calorie_target =
            Self::calorie_target(&body, resources.config.default_calorie_target)?;
        let kind = Self::plan_kind(&body)?;

        let plan = MealPlanService::new(&resources).generate(diet_type, calorie_target, kind);
        let response = MealPlanResponse {
            success: true,
            diet_type,
            plan_type: match kind {
                PlanKind::Daily => "daily",
                PlanKind::Weekly => "weekly",
            },
            plan,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/goals
    async fn handle_goals(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Response {
        let inputs = GoalInputs::from_json(&lenient_json(&body));
        let goals = GoalService::new(&resources).compute(&inputs);
        (StatusCode::OK, Json(goals)).into_response()
    }
}
