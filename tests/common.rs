// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, catalog and resource builders, and stub model providers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]

use std::env;
use std::sync::{Arc, Once};

use async_trait::async_trait;
use diet_core::errors::{AppError, AppResult};
use diet_intelligence::{PlannerConfig, RecipeCatalog};
use diet_planner::config::{LlmConfig, ServerConfig};
use diet_planner::llm::LlmProvider;
use diet_planner::resources::ServerResources;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// The embedded catalog
pub fn catalog() -> RecipeCatalog {
    init_test_logging();
    RecipeCatalog::embedded().expect("embedded catalog must load")
}

/// Seeded generator for reproducible draws
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Server configuration with the model disabled
pub fn offline_server_config() -> ServerConfig {
    ServerConfig {
        llm: LlmConfig {
            enabled: false,
            ..LlmConfig::default()
        },
        ..ServerConfig::default()
    }
}

/// Resources using the given provider (or none)
pub fn resources_with(llm: Option<Arc<dyn LlmProvider>>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        catalog(),
        PlannerConfig::default(),
        offline_server_config(),
        llm,
    ))
}

/// Resources without a model
pub fn offline_resources() -> Arc<ServerResources> {
    resources_with(None)
}

/// Provider that always answers with the same text
pub struct CannedProvider {
    reply: String,
}

impl CannedProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    pub fn shared(reply: impl Into<String>) -> Arc<dyn LlmProvider> {
        Arc::new(Self::new(reply))
    }
}

#[async_trait]
impl LlmProvider for CannedProvider {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        Ok(self.reply.clone())
    }
}

/// Provider that always fails as if the model server were down
pub struct UnreachableProvider;

#[async_trait]
impl LlmProvider for UnreachableProvider {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::external_unavailable("Test", "connection refused"))
    }
}
