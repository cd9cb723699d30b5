//! AI adapters - completion provider implementations.

mod mock_provider;
mod openai_provider;

pub use mock_provider::MockProvider;
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
