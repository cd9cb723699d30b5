//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
///
/// The API key is optional: without one (or with a malformed one) the
/// service runs entirely on the characters' deterministic fallback voices.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Base URL for the OpenAI API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a usable OpenAI key is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| is_valid_api_key(k))
    }

    /// Validate AI configuration
    ///
    /// An absent key is valid (fallback mode); a present but malformed
    /// key is a configuration error rather than a silent downgrade.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.openai_api_key {
            if !is_valid_api_key(key) {
                return Err(ValidationError::InvalidOpenAiKey);
            }
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Checks the key shape OpenAI issues: `sk-` or `sk-proj-` prefix with a
/// plausible length.
fn is_valid_api_key(key: &str) -> bool {
    (key.starts_with("sk-") || key.starts_with("sk-proj-")) && key.len() > 20
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.has_openai());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_absent_key_is_valid() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_valid_key_shapes() {
        for key in [
            "sk-abcdefghijklmnopqrstuvwx",
            "sk-proj-abcdefghijklmnopqrst",
        ] {
            let config = AiConfig {
                openai_api_key: Some(key.to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "{key} should validate");
            assert!(config.has_openai());
        }
    }

    #[test]
    fn test_malformed_key_rejected() {
        for key in ["", "sk-short", "pk-abcdefghijklmnopqrstuvwx"] {
            let config = AiConfig {
                openai_api_key: Some(key.to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{key} should be rejected");
        }
    }
}
