// ABOUTME: Generative model abstraction used by the AI plan and goal services
// ABOUTME: Defines the provider contract and lenient JSON extraction from free-form replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generative Model Providers
//!
//! The AI endpoints ask a text model for a JSON object and treat whatever
//! comes back as untrusted. Providers only move text; parsing and repair
//! happen in the services through [`extract_json_object`] and the engine's
//! normalizer.

mod ollama;
/// Prompt builders for meal plans and goals
pub mod prompts;

pub use ollama::OllamaProvider;

use async_trait::async_trait;
use diet_core::errors::AppResult;
use serde_json::Value;

/// Text-in, text-out model provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider identifier for logs (e.g. "ollama")
    fn name(&self) -> &'static str;

    /// Send a single prompt and return the raw reply text
    ///
    /// # Errors
    ///
    /// Returns an external service error when the model is unreachable,
    /// answers with a non-success status, or the reply has no text
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Pull a JSON object out of a model reply
///
/// A reply that is already an object (after trimming) is parsed as-is;
/// otherwise the span from the first `{` to the last `}` is tried.
/// Returns `None` when nothing parses to a JSON object.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    let candidate = if trimmed.starts_with('{') {
        trimmed
    } else {
        let start = trimmed.find('{')?;
        let end = trimmed.rfind('}')?;
        if end <= start {
            return None;
        }
        &trimmed[start..=end]
    };

    serde_json::from_str::<Value>(candidate)
        .ok()
        .filter(Value::is_object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bare_object() {
        let value = extract_json_object("  {\"goalWeight\": 65}\n").unwrap();
        assert_eq!(value["goalWeight"], 65);
    }

    #[test]
    fn test_extracts_object_wrapped_in_prose() {
        let reply = "Sure! Here is your plan:\n```json\n{\"breakfast\": {\"name\": \"Oats\", \"calories\": 400}}\n```\nEnjoy.";
        let value = extract_json_object(reply).unwrap();
        assert_eq!(value["breakfast"]["name"], "Oats");
    }

    #[test]
    fn test_rejects_replies_without_an_object() {
        assert!(extract_json_object("no json here").is_none());
        assert!(extract_json_object("} backwards {").is_none());
        assert!(extract_json_object("{not valid json}").is_none());
        assert!(extract_json_object("[1, 2, 3]").is_none());
    }
}
