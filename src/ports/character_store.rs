//! Character Store Port - durable persona lookups.
//!
//! The characters table is keyed two ways for backward compatibility: older
//! rows carry the original public id in the legacy alias field while newer
//! rows use the primary id. The resolver tries the legacy key first, then
//! the primary key, as an explicit two-step strategy; this port exposes one
//! method per step.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::character::Persona;
use crate::domain::foundation::CharacterId;

/// Port for persona lookups against the durable store.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Looks up a persona by the legacy alias key.
    async fn find_by_legacy_id(&self, id: &CharacterId)
        -> Result<Option<Persona>, CharacterStoreError>;

    /// Looks up a persona by the primary id key.
    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Persona>, CharacterStoreError>;
}

/// Character store errors.
#[derive(Debug, Error)]
pub enum CharacterStoreError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(String),

    /// Stored row could not be decoded into a persona.
    #[error("corrupt character row: {0}")]
    Corrupt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_correctly() {
        assert_eq!(
            CharacterStoreError::Database("connection refused".into()).to_string(),
            "database error: connection refused"
        );
        assert_eq!(
            CharacterStoreError::Corrupt("bad traits json".into()).to_string(),
            "corrupt character row: bad traits json"
        );
    }
}
