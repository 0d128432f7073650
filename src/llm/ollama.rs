// ABOUTME: Ollama provider speaking the non-streaming /api/generate protocol
// ABOUTME: Connection failures surface as service-unavailable so callers can fall back locally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use async_trait::async_trait;
use diet_core::errors::{AppError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::LlmProvider;
use crate::config::LlmConfig;

const SERVICE: &str = "Ollama";
const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Reply body; different Ollama-compatible servers put the text in different fields
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    message: Option<ReplyMessage>,
    #[serde(default)]
    output: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplyMessage {
    Text(String),
    Chat { content: String },
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        let message = self.message.map(|message| match message {
            ReplyMessage::Text(text) | ReplyMessage::Chat { content: text } => text,
        });
        [self.response, message, self.output]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

/// Ollama `/api/generate` client
pub struct OllamaProvider {
    client: Client,
    url: String,
    model: String,
}

impl OllamaProvider {
    /// Create a provider from the endpoint settings
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: &LlmConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(config.timeout_secs)))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build Ollama HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            model: config.model.clone(),
        })
    }

    /// Model name sent with each request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn name(&self) -> &'static str {
        "ollama"
    }

    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        debug!("Sending generate request to Ollama");

        let response = self
            .client
            .post(&self.url)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Ollama: {e}");
                if e.is_connect() || e.is_timeout() {
                    AppError::external_unavailable(
                        SERVICE,
                        format!("Cannot reach model server at {}: {e}", self.url),
                    )
                } else {
                    AppError::external_service(SERVICE, format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                SERVICE,
                format!("Model server returned {status}: {body}"),
            ));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Ollama response: {e}");
            AppError::external_service(SERVICE, format!("Failed to parse response: {e}"))
        })?;

        body.into_text()
            .ok_or_else(|| AppError::external_service(SERVICE, "Model reply contained no text"))
    }
}
