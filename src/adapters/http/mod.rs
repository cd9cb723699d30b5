//! HTTP adapters - REST API implementations.

pub mod conversation;

// Re-export key types for convenience
pub use conversation::{api_router, ConversationAppState};
