// ABOUTME: Nutrition planning engine: catalog, selection, plan generation, goals, normalization
// ABOUTME: Pure synchronous computation over immutable inputs; safe to call from any thread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Intelligence
//!
//! The planning engine of the Diet Planner. Nothing here performs I/O or holds
//! shared mutable state: the catalog and configuration are immutable values
//! passed by reference, and randomness is supplied by the caller through an
//! [`selection::EntropySource`].
//!
//! Dependency order, leaves first:
//!
//! - **catalog**: diet type -> meal slot -> recipes
//! - **selection**: uniform random picks with injectable entropy
//! - **`plan_generator`**: daily and weekly plans with calorie accounting
//! - **`goal_calculator`**: goal weight and daily calories from biometrics
//! - **`plan_normalizer`**: repair of untrusted candidate plans
//! - **fallback**: local plan synthesis when no candidate is available

/// Engine configuration and validation
pub mod config;

/// Read-only recipe catalog
pub mod catalog;

/// Random selection policy
pub mod selection;

/// Daily and weekly plan generation
pub mod plan_generator;

/// Goal weight and calorie budget computation
pub mod goal_calculator;

/// Candidate plan repair
pub mod plan_normalizer;

/// Local fallback plan synthesis
pub mod fallback;

pub use catalog::{CatalogError, DietRecipes, RecipeCatalog, RecipeLocation};
pub use config::{ConfigError, PlannerConfig};
pub use fallback::fallback_plan;
pub use goal_calculator::{compute_goals, reconcile_goals, ReconciledGoals};
pub use plan_generator::{generate_daily, generate_weekly};
pub use plan_normalizer::normalize;
pub use selection::{pick, EntropySource, SequenceEntropy};
