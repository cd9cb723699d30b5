//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier value objects, timestamp, and error types
//! that form the vocabulary of the Round Table domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{CharacterId, ConversationId, ResponseId};
pub use timestamp::Timestamp;
