//! In-memory adapters for testing and storage-less deployments.

mod store;

pub use store::{InMemoryCharacterStore, InMemoryConversationCache, InMemoryConversationStore};
