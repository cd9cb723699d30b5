//! Generation parameters for a conversation request.

use serde::{Deserialize, Serialize};

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default maximum output tokens per character response.
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Optional per-request overrides for response generation.
///
/// Absent fields fall back to the defaults above when the completion
/// request is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Model identifier override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Sampling temperature override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum output tokens override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl GenerationOptions {
    /// Returns the model to request, applying the default.
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Returns the temperature to request, applying the default.
    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Returns the max output tokens to request, applying the default.
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }
}
