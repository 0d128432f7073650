// ABOUTME: Core data models for the Diet Planner nutrition engine
// ABOUTME: Re-exports recipe, plan, and goal structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Data structures shared by the planning engine and the HTTP layer.
//!
//! - `Recipe`, `MealType`, `Placeholder`, `MealChoice`: catalog entries and plan slots
//! - `DailyPlan`, `WeeklyPlan`: catalog-drawn plans with calorie accounting
//! - `PlanItem`, `NormalizedPlan`: name/calorie plans from untrusted or synthesized data
//! - `GoalInputs`, `GoalOutputs`, `Gender`: goal calculator inputs and results
//!
//! All wire shapes use camelCase field names.

mod goals;
mod plan;
mod recipe;

pub use goals::{Gender, GoalInputs, GoalOutputs};
pub use plan::{DailyPlan, NormalizedPlan, PlanItem, WeeklyPlan, Weekday};
pub use recipe::{Difficulty, MealChoice, MealType, Placeholder, Recipe};
