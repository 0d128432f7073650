// ABOUTME: Shared, immutable server resources handed to every route as axum state
// ABOUTME: Built once at startup from validated configuration and the embedded catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use diet_core::errors::AppResult;
use diet_intelligence::{PlannerConfig, RecipeCatalog};
use tracing::info;

use crate::config::ServerConfig;
use crate::llm::{LlmProvider, OllamaProvider};

/// Everything a request handler may read
///
/// All fields are read-only after construction, so handlers share them
/// through `Arc` without locking.
#[derive(Clone)]
pub struct ServerResources {
    /// Recipe catalog
    pub catalog: Arc<RecipeCatalog>,
    /// Engine configuration
    pub planner: Arc<PlannerConfig>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Generative model, absent when disabled
    pub llm: Option<Arc<dyn LlmProvider>>,
}

impl ServerResources {
    /// Assemble resources from already-built parts
    #[must_use]
    pub fn new(
        catalog: RecipeCatalog,
        planner: PlannerConfig,
        config: ServerConfig,
        llm: Option<Arc<dyn LlmProvider>>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            planner: Arc::new(planner),
            config: Arc::new(config),
            llm,
        }
    }

    /// Build resources for the server, creating the Ollama client when enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for the model cannot be built
    pub fn from_config(
        catalog: RecipeCatalog,
        planner: PlannerConfig,
        config: ServerConfig,
    ) -> AppResult<Self> {
        let llm: Option<Arc<dyn LlmProvider>> = if config.llm.enabled {
            let provider = OllamaProvider::new(&config.llm)?;
            info!(url = %config.llm.url, model = provider.model(), "Generative model enabled");
            Some(Arc::new(provider))
        } else {
            info!("Generative model disabled, AI endpoints use local fallbacks");
            None
        };

        Ok(Self::new(catalog, planner, config, llm))
    }
}
