//! Redis-backed conversation cache for production deployments.
//!
//! Records are stored as JSON under `conversation:{id}` with SET EX. The
//! cache is strictly a read accelerator; expiry or eviction only means the
//! next read falls through to the durable store.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::conversation::ConversationRecord;
use crate::domain::foundation::ConversationId;
use crate::ports::{CacheError, ConversationCache};

/// Redis-backed conversation cache.
#[derive(Clone)]
pub struct RedisConversationCache {
    conn: MultiplexedConnection,
}

impl RedisConversationCache {
    /// Creates a new Redis conversation cache.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    fn cache_key(conversation_id: &ConversationId) -> String {
        format!("conversation:{}", conversation_id.as_str())
    }
}

#[async_trait]
impl ConversationCache for RedisConversationCache {
    async fn get(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<ConversationRecord>, CacheError> {
        let mut conn = self.conn.clone();

        let payload: Option<String> = conn
            .get(Self::cache_key(conversation_id))
            .await
            .map_err(|e: redis::RedisError| CacheError::Unavailable(e.to_string()))?;

        match payload {
            Some(json) => {
                let record = serde_json::from_str(&json).map_err(|e| {
                    CacheError::Corrupt(format!("Failed to parse cached conversation: {}", e))
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, record: &ConversationRecord, ttl: Duration) -> Result<(), CacheError> {
        let payload = serde_json::to_string(record).map_err(|e| {
            CacheError::Corrupt(format!("Failed to serialize conversation: {}", e))
        })?;

        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(
            Self::cache_key(&record.conversation_id),
            payload,
            ttl.as_secs(),
        )
        .await
        .map_err(|e: redis::RedisError| CacheError::Unavailable(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_namespaced() {
        let id = ConversationId::new("abc-123").unwrap();
        assert_eq!(RedisConversationCache::cache_key(&id), "conversation:abc-123");
    }
}
