// ABOUTME: Lenient coercion of untrusted JSON values into numbers and names
// ABOUTME: Shared by request parsing, goal reconciliation, and plan normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Lenient JSON coercion
//!
//! Request bodies and generative-model output both carry numbers as either JSON
//! numbers or numeric strings. These helpers accept both and report anything
//! else (null, booleans, empty or non-numeric text, infinities) as missing.

use serde_json::Value;

/// Read a finite number from a JSON number or numeric string
#[must_use]
pub fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Read a finite, strictly positive number
#[must_use]
pub fn positive_number(value: &Value) -> Option<f64> {
    number(value).filter(|n| *n > 0.0)
}

/// Read a string with surrounding whitespace removed, if anything is left
#[must_use]
pub fn non_empty_str(value: &Value) -> Option<&str> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
