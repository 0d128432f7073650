// ABOUTME: Environment-based server configuration for HTTP, calorie defaults, and the LLM endpoint
// ABOUTME: Parses and validates environment variables into a typed ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HTTP_HOST` | `0.0.0.0` |
//! | `HTTP_PORT` | `3000` |
//! | `DEFAULT_CALORIE_TARGET` | `1600` |
//! | `AI_DEFAULT_CALORIE_LIMIT` | `1800` |
//! | `LLM_ENABLED` | `true` |
//! | `OLLAMA_URL` | `http://localhost:11434/api/generate` |
//! | `OLLAMA_MODEL` | `llama3.1` |
//! | `LLM_TIMEOUT_SECS` | `20` |

use diet_core::constants::calories;
use diet_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 3000;
/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
/// Default Ollama generate endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
/// Default Ollama model
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.1";
/// Default request timeout for the model server
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 20;

/// Generative-model endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Whether to call the model at all; when false every AI request uses the local fallback
    pub enabled: bool,
    /// Full URL of the `/api/generate` endpoint
    pub url: String,
    /// Model name sent with each request
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_OLLAMA_URL.to_owned(),
            model: DEFAULT_OLLAMA_MODEL.to_owned(),
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Calorie target for catalog plans when the request has none
    pub default_calorie_target: u32,
    /// Calorie limit for AI plans when the request has none
    pub ai_default_calorie_limit: u32,
    /// Model endpoint
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            default_calorie_target: calories::DEFAULT_PLAN_TARGET,
            ai_default_calorie_limit: calories::DEFAULT_AI_PLAN_LIMIT,
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set but cannot be parsed,
    /// or a calorie default is zero
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HTTP_HOST", DEFAULT_HTTP_HOST),
            http_port: env_parse("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            default_calorie_target: env_parse(
                "DEFAULT_CALORIE_TARGET",
                calories::DEFAULT_PLAN_TARGET,
            )?,
            ai_default_calorie_limit: env_parse(
                "AI_DEFAULT_CALORIE_LIMIT",
                calories::DEFAULT_AI_PLAN_LIMIT,
            )?,
            llm: LlmConfig {
                enabled: env_parse("LLM_ENABLED", true)?,
                url: env_var_or("OLLAMA_URL", DEFAULT_OLLAMA_URL),
                model: env_var_or("OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
                timeout_secs: env_parse("LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a calorie default or the timeout is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.default_calorie_target == 0 || self.ai_default_calorie_limit == 0 {
            return Err(AppError::config("calorie defaults must be positive"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(AppError::config("LLM_TIMEOUT_SECS must be positive"));
        }
        Ok(())
    }

    /// Host and port to bind; the host may be a name such as `localhost`
    #[must_use]
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        let llm = if self.llm.enabled {
            format!("{} ({})", self.llm.url, self.llm.model)
        } else {
            "disabled (local fallback only)".to_owned()
        };
        format!(
            "Diet Planner Configuration: bind={}:{} default_target={} ai_default_limit={} llm={}",
            self.host, self.http_port, self.default_calorie_target, self.ai_default_calorie_limit, llm
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key}='{raw}': {e}"))),
        _ => Ok(default),
    }
}
