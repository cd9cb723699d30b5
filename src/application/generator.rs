//! Response generation: AI completion with deterministic degradation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::character::{fallback_reply, system_prompt, Persona};
use crate::domain::conversation::GenerationOptions;
use crate::ports::{CompletionProvider, CompletionRequest, MessageRole};

/// Produces one response text per (message, persona) pair.
///
/// Never fails: with no provider configured, or on any provider error,
/// timeout, or empty completion, the deterministic fallback reply for the
/// persona is returned instead. The caller always receives usable text.
#[derive(Clone)]
pub struct ResponseGenerator {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl ResponseGenerator {
    /// Creates a generator that always uses the deterministic fallback.
    pub fn new() -> Self {
        Self { provider: None }
    }

    /// Attaches a completion provider for AI-generated responses.
    pub fn with_provider(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Returns true when a completion provider is configured.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Generates response text for a persona. Single provider attempt,
    /// no retries; every failure path degrades to the fallback reply.
    pub async fn generate(
        &self,
        message: &str,
        persona: &Persona,
        options: &GenerationOptions,
    ) -> String {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => {
                debug!(character = %persona.display_name(), "no completion provider, using fallback reply");
                return fallback_reply(message, persona);
            }
        };

        let request = CompletionRequest::new(options.model())
            .with_message(MessageRole::System, system_prompt(persona))
            .with_message(MessageRole::User, message)
            .with_temperature(options.temperature())
            .with_max_tokens(options.max_tokens());

        match provider.complete(request).await {
            Ok(response) => {
                let content = response.content.trim();
                if content.is_empty() {
                    warn!(
                        character = %persona.display_name(),
                        model = %response.model,
                        "completion returned empty content, using fallback reply"
                    );
                    fallback_reply(message, persona)
                } else {
                    content.to_string()
                }
            }
            Err(error) => {
                warn!(
                    character = %persona.display_name(),
                    %error,
                    "completion failed, using fallback reply"
                );
                fallback_reply(message, persona)
            }
        }
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockProvider;
    use crate::domain::character::resolve_builtin;
    use crate::domain::foundation::CharacterId;

    fn socrates() -> Persona {
        resolve_builtin(&CharacterId::new("1").unwrap())
    }

    #[tokio::test]
    async fn without_provider_returns_fallback() {
        let generator = ResponseGenerator::new();
        let content = generator
            .generate("What is virtue?", &socrates(), &GenerationOptions::default())
            .await;
        assert_eq!(content, fallback_reply("What is virtue?", &socrates()));
    }

    #[tokio::test]
    async fn provider_success_returns_trimmed_content() {
        let provider = Arc::new(MockProvider::replying("  The examined life.  "));
        let generator = ResponseGenerator::new().with_provider(provider);

        let content = generator
            .generate("What is virtue?", &socrates(), &GenerationOptions::default())
            .await;
        assert_eq!(content, "The examined life.");
    }

    #[tokio::test]
    async fn provider_error_degrades_to_fallback() {
        let provider = Arc::new(MockProvider::failing());
        let generator = ResponseGenerator::new().with_provider(provider);

        let content = generator
            .generate("hello", &socrates(), &GenerationOptions::default())
            .await;
        assert_eq!(content, fallback_reply("hello", &socrates()));
    }

    #[tokio::test]
    async fn empty_completion_degrades_to_fallback() {
        let provider = Arc::new(MockProvider::replying("   "));
        let generator = ResponseGenerator::new().with_provider(provider);

        let content = generator
            .generate("hello", &socrates(), &GenerationOptions::default())
            .await;
        assert_eq!(content, fallback_reply("hello", &socrates()));
    }

    #[tokio::test]
    async fn request_carries_persona_prompt_and_options() {
        let provider = Arc::new(MockProvider::replying("ok"));
        let generator = ResponseGenerator::new().with_provider(provider.clone());

        let options = GenerationOptions {
            model: Some("gpt-4o".to_string()),
            temperature: Some(0.3),
            max_tokens: Some(64),
        };
        generator.generate("What is virtue?", &socrates(), &options).await;

        let request = provider.last_request().expect("provider was called");
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_tokens, 64);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert!(request.messages[0].content.contains("You are Socrates"));
        assert_eq!(request.messages[1].content, "What is virtue?");
    }
}
