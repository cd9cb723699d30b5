//! PostgreSQL implementation of ConversationStore.
//!
//! One row per conversation. The response list is stored as serialized
//! JSON in a text column; a repeated conversation id upserts the row,
//! matching the at-most-once, last-write-wins persistence contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::conversation::{CharacterResponse, ConversationRecord};
use crate::domain::foundation::{ConversationId, Timestamp};
use crate::ports::{ConversationStore, ConversationStoreError};

/// PostgreSQL implementation of ConversationStore.
#[derive(Clone)]
pub struct PostgresConversationStore {
    pool: PgPool,
}

impl PostgresConversationStore {
    /// Creates a new PostgresConversationStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationStore for PostgresConversationStore {
    async fn put(&self, record: &ConversationRecord) -> Result<(), ConversationStoreError> {
        let responses = serde_json::to_string(&record.responses).map_err(|e| {
            ConversationStoreError::Corrupt(format!("Failed to serialize responses: {}", e))
        })?;

        sqlx::query(
            r#"
            INSERT INTO conversations (conversation_id, message, responses, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (conversation_id) DO UPDATE SET
                message = EXCLUDED.message,
                responses = EXCLUDED.responses,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(record.conversation_id.as_str())
        .bind(&record.message)
        .bind(&responses)
        .bind(record.created_at.as_datetime())
        .bind(record.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            ConversationStoreError::Database(format!("Failed to upsert conversation: {}", e))
        })?;

        Ok(())
    }

    async fn get(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<ConversationRecord>, ConversationStoreError> {
        let row = sqlx::query(
            r#"
            SELECT conversation_id, message, responses, created_at, updated_at
            FROM conversations
            WHERE conversation_id = $1
            "#,
        )
        .bind(conversation_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            ConversationStoreError::Database(format!("Failed to fetch conversation: {}", e))
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: String = row.try_get("conversation_id").map_err(|e| {
            ConversationStoreError::Corrupt(format!("Missing conversation_id column: {}", e))
        })?;
        let conversation_id = ConversationId::new(id).map_err(|e| {
            ConversationStoreError::Corrupt(format!("Invalid conversation id: {}", e))
        })?;

        let responses_json: String = row.try_get("responses").map_err(|e| {
            ConversationStoreError::Corrupt(format!("Missing responses column: {}", e))
        })?;
        let responses: Vec<CharacterResponse> =
            serde_json::from_str(&responses_json).map_err(|e| {
                ConversationStoreError::Corrupt(format!("Failed to parse responses: {}", e))
            })?;

        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(|e| {
            ConversationStoreError::Corrupt(format!("Missing created_at column: {}", e))
        })?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(|e| {
            ConversationStoreError::Corrupt(format!("Missing updated_at column: {}", e))
        })?;

        Ok(Some(ConversationRecord {
            conversation_id,
            message: row.try_get("message").map_err(|e| {
                ConversationStoreError::Corrupt(format!("Missing message column: {}", e))
            })?,
            responses,
            created_at: Timestamp::from_datetime(created_at),
            updated_at: Timestamp::from_datetime(updated_at),
        }))
    }
}
