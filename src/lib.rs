// ABOUTME: Main library entry point for the Diet Planner HTTP server
// ABOUTME: Wires configuration, logging, the generative model client, services and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Planner
//!
//! HTTP front end for the nutrition planning engine in `diet-intelligence`.
//!
//! ## Architecture
//!
//! - **config**: environment-driven server settings
//! - **logging**: `tracing-subscriber` setup
//! - **llm**: optional text model used by the AI endpoints
//! - **services**: catalog plans, AI plans and goals, with local fallbacks
//! - **routes**: axum routers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use diet_planner::config::ServerConfig;
//! use diet_planner::resources::ServerResources;
//! use diet_intelligence::{PlannerConfig, RecipeCatalog};
//!
//! # fn main() -> anyhow::Result<()> {
//! let resources = ServerResources::from_config(
//!     RecipeCatalog::embedded()?,
//!     PlannerConfig::load()?,
//!     ServerConfig::from_env()?,
//! )?;
//! let app = diet_planner::routes::router(std::sync::Arc::new(resources));
//! # drop(app);
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// Structured logging
pub mod logging;

/// Generative model providers and prompts
pub mod llm;

/// Shared request state
pub mod resources;

/// Domain services
pub mod services;

/// HTTP routes
pub mod routes;

pub use diet_core::errors;
