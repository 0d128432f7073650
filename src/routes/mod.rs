// ABOUTME: HTTP route composition for the Diet Planner API
// ABOUTME: Merges catalog, plan, goal, AI and health routes under shared tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route modules
//!
//! Each domain exposes a unit struct with a `routes(resources)` constructor;
//! [`router`] merges them into the application.

/// Model-assisted plan and goal routes
pub mod ai;
/// Recipe catalog routes
pub mod catalog;
/// Health check routes
pub mod health;
/// Catalog plan and local goal routes
pub mod plans;

pub use ai::AiRoutes;
pub use catalog::CatalogRoutes;
pub use health::HealthRoutes;
pub use plans::PlanRoutes;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::resources::ServerResources;

/// Extra time allowed on top of the model timeout before a request is cut off
const REQUEST_TIMEOUT_MARGIN_SECS: u64 = 10;

/// Build the complete application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let request_timeout = request_timeout(resources.config.llm.timeout_secs);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(CatalogRoutes::routes(Arc::clone(&resources)))
        .merge(PlanRoutes::routes(Arc::clone(&resources)))
        .merge(AiRoutes::routes(resources))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Whole-request deadline: the model timeout plus a margin for local work
fn request_timeout(llm_timeout_secs: u64) -> Duration {
    Duration::from_secs(llm_timeout_secs.saturating_add(REQUEST_TIMEOUT_MARGIN_SECS))
}

/// Parse a request body as JSON, treating empty or malformed bodies as `{}`
///
/// Browsers post these forms with inconsistent content types, so the
/// body is read as bytes and every field is parsed leniently downstream.
pub(crate) fn lenient_json(body: &[u8]) -> Value {
    serde_json::from_slice::<Value>(body)
        .ok()
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}
