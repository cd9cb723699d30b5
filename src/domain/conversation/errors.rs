//! Errors that cross the conversation flow boundary.

use thiserror::Error;

/// The only hard failures `process_message` raises to its caller.
///
/// Every downstream failure (resolution, generation, persistence, caching)
/// is absorbed into degraded responses instead of propagating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    /// Message is empty or whitespace-only.
    #[error("Invalid request: message cannot be empty")]
    EmptyMessage,

    /// No character ids were supplied.
    #[error("Invalid request: at least one character ID is required")]
    NoCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_as_invalid_request() {
        assert!(ConversationError::EmptyMessage
            .to_string()
            .starts_with("Invalid request"));
        assert!(ConversationError::NoCharacters
            .to_string()
            .starts_with("Invalid request"));
    }
}
