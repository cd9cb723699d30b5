//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the conversation flow and the outside world. Adapters implement them.
//!
//! - `CompletionProvider` - opaque AI text-completion capability
//! - `CharacterStore` - durable persona lookups (dual-key characters table)
//! - `ConversationStore` - durable conversation records (put/get, last write wins)
//! - `ConversationCache` - expiring conversation overlay in front of the store

mod character_store;
mod completion_provider;
mod conversation_cache;
mod conversation_store;

pub use character_store::{CharacterStore, CharacterStoreError};
pub use completion_provider::{
    CompletionError, CompletionProvider, CompletionRequest, CompletionResponse, Message,
    MessageRole,
};
pub use conversation_cache::{CacheError, ConversationCache};
pub use conversation_store::{ConversationStore, ConversationStoreError};
