//! Conversation Cache Port - expiring overlay in front of the durable store.
//!
//! The cache is a pure performance layer, never authoritative: entries
//! expire, reads fall through to the store on a miss, and a store hit
//! repopulates the cache.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::conversation::ConversationRecord;
use crate::domain::foundation::ConversationId;

/// Port for the conversation cache.
#[async_trait]
pub trait ConversationCache: Send + Sync {
    /// Reads a cached conversation record.
    async fn get(&self, id: &ConversationId) -> Result<Option<ConversationRecord>, CacheError>;

    /// Writes a conversation record with the given time-to-live.
    async fn set(&self, record: &ConversationRecord, ttl: Duration) -> Result<(), CacheError>;
}

/// Cache errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Cache backend unreachable or erroring.
    #[error("cache unavailable: {0}")]
    Unavailable(String),

    /// Cached value could not be decoded.
    #[error("corrupt cache entry: {0}")]
    Corrupt(String),
}
