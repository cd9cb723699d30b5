//! Conversation Store Port - durable conversation records.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::ConversationRecord;
use crate::domain::foundation::ConversationId;

/// Port for persisting and reading conversation records.
///
/// Semantics are plain key-value: `put` overwrites any existing record for
/// the same conversation id (last write wins, no transactions or conflict
/// detection), `get` returns the record or `None`.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Writes a conversation record, overwriting any previous version.
    async fn put(&self, record: &ConversationRecord) -> Result<(), ConversationStoreError>;

    /// Reads a conversation record by id.
    async fn get(
        &self,
        id: &ConversationId,
    ) -> Result<Option<ConversationRecord>, ConversationStoreError>;
}

/// Conversation store errors.
#[derive(Debug, Error)]
pub enum ConversationStoreError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(String),

    /// Stored record could not be decoded.
    #[error("corrupt conversation row: {0}")]
    Corrupt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_correctly() {
        assert_eq!(
            ConversationStoreError::Database("timeout".into()).to_string(),
            "database error: timeout"
        );
    }
}
