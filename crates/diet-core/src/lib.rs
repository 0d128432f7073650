// ABOUTME: Core types and constants for the Diet Planner nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Core
//!
//! Foundation crate providing shared types and constants for the Diet Planner.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Calorie bounds, meal allocation shares, and default dish names
//! - **models**: Recipes, plans, and goals
//! - **coerce**: Lenient reading of untrusted JSON values

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `DailyPlan`, `GoalInputs`, etc.)
pub mod models;

/// Lenient number and string coercion for untrusted JSON
pub mod coerce;
