// ABOUTME: Configuration module for the Diet Planner server
// ABOUTME: Environment-based server settings; engine settings live in diet-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based server configuration
pub mod environment;

pub use environment::{LlmConfig, ServerConfig};
