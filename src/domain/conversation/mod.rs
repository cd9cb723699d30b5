//! Conversation module - Exchanges between a user and the round table.

mod errors;
mod options;
mod record;

pub use errors::ConversationError;
pub use options::GenerationOptions;
pub use record::{CharacterResponse, ConversationRecord};
