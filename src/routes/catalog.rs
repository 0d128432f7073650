// ABOUTME: Read-only recipe catalog endpoints: diet types, recipes per diet, recipe by id
// ABOUTME: Unknown diets and ids are 404s; unknown meal type filters return every bucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use diet_core::errors::AppError;
use diet_core::models::{MealType, Recipe};
use diet_intelligence::DietRecipes;
use serde::{Deserialize, Serialize};

use crate::resources::ServerResources;

/// Optional filter for `/api/recipes/:diet_type`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipesQuery {
    /// `breakfast`, `lunch`, `dinner` or `snacks`
    pub meal_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DietTypesResponse<'a> {
    success: bool,
    diet_types: Vec<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BucketResponse<'a> {
    success: bool,
    diet_type: &'a str,
    meal_type: MealType,
    recipes: &'a [Recipe],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DietResponse<'a> {
    success: bool,
    recipes: &'a DietRecipes,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeResponse<'a> {
    success: bool,
    diet_type: &'a str,
    meal_type: MealType,
    recipe: &'a Recipe,
}

/// Catalog routes implementation
pub struct CatalogRoutes;

impl CatalogRoutes {
    /// Catalog query routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/diet-types", get(Self::handle_diet_types))
            .route("/api/recipes/:diet_type", get(Self::handle_recipes))
            .route("/api/recipe/:id", get(Self::handle_recipe))
            .with_state(resources)
    }

    /// Handle GET /api/diet-types
    async fn handle_diet_types(State(resources): State<Arc<ServerResources>>) -> Response {
        let response = DietTypesResponse {
            success: true,
            diet_types: resources.catalog.diet_types().collect(),
        };
        (StatusCode::OK, Json(response)).into_response()
    }

    /// Handle GET /api/recipes/:diet_type
    async fn handle_recipes(
        State(resources): State<Arc<ServerResources>>,
        Path(diet_type): Path<String>,
        Query(query): Query<RecipesQuery>,
    ) -> Result<Response, AppError> {
        let diet = resources
            .catalog
            .diet(&diet_type)
            .ok_or_else(|| AppError::not_found(format!("Diet type '{diet_type}'")))?;

        let meal_type = query.meal_type.as_deref().and_then(MealType::from_key);
        let response = match meal_type {
            Some(meal_type) => Json(BucketResponse {
                success: true,
                diet_type: &diet.diet_type,
                meal_type,
                recipes: diet.bucket(meal_type),
            })
            .into_response(),
            None => Json(DietResponse {
                success: true,
                recipes: diet,
            })
            .into_response(),
        };
        Ok(response)
    }

    /// Handle GET /api/recipe/:id
    async fn handle_recipe(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe_id: u32 = id.parse().map_err(|_| {
            AppError::invalid_input(format!("Recipe id must be a positive integer, got '{id}'"))
        })?;

        let location = resources.catalog.find_recipe(recipe_id).ok_or_else(|| {
            AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(id)
        })?;

        let response = RecipeResponse {
            success: true,
            diet_type: location.diet_type,
            meal_type: location.meal_type,
            recipe: location.recipe,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
