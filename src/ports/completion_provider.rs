//! Completion Provider Port - Interface for the AI completion capability.
//!
//! The conversation flow treats the AI backend as an opaque text-completion
//! capability: one system message and one user message in, text out. A
//! single attempt is made per generation; retry policy is deliberately not
//! part of this contract because every failure degrades to the deterministic
//! fallback reply instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for AI completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generates a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, CompletionError>;
}

/// Request for a completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier, e.g. "gpt-3.5-turbo".
    pub model: String,
    /// Ordered messages; the conversation flow sends exactly one system
    /// message followed by one user message.
    pub messages: Vec<Message>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output tokens.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Creates an empty request for the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: 0.7,
            max_tokens: 200,
        }
    }

    /// Appends a message.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the maximum output tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A message in the completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message.
    pub role: MessageRole,
    /// Message content.
    pub content: String,
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions (the persona prompt).
    System,
    /// User input.
    User,
    /// Assistant (model) response.
    Assistant,
}

/// Response from a completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    /// Generated content. May be empty; callers treat empty as a failure.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
}

/// Completion provider errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out. Partial output is discarded.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl CompletionError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_works() {
        let request = CompletionRequest::new("gpt-3.5-turbo")
            .with_message(MessageRole::System, "You are Socrates.")
            .with_message(MessageRole::User, "What is virtue?")
            .with_temperature(0.5)
            .with_max_tokens(128);

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[1].content, "What is virtue?");
        assert_eq!(request.temperature, 0.5);
        assert_eq!(request.max_tokens, 128);
    }

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(Message::system("s").role, MessageRole::System);
        assert_eq!(Message::user("u").role, MessageRole::User);
    }

    #[test]
    fn message_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MessageRole::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), "\"user\"");
    }

    #[test]
    fn errors_display_correctly() {
        assert_eq!(
            CompletionError::Timeout { timeout_secs: 30 }.to_string(),
            "request timed out after 30s"
        );
        assert_eq!(
            CompletionError::unavailable("down").to_string(),
            "provider unavailable: down"
        );
    }
}
