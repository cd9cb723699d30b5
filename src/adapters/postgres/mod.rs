//! PostgreSQL adapters for the storage ports.

mod character_store;
mod conversation_store;

pub use character_store::PostgresCharacterStore;
pub use conversation_store::PostgresConversationStore;
