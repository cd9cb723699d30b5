//! Character responses and the persisted conversation record.

use serde::{Deserialize, Serialize};

use crate::domain::character::Persona;
use crate::domain::foundation::{CharacterId, ConversationId, ResponseId, Timestamp};

/// One character's answer to a user message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    /// Unique id of this response.
    pub id: ResponseId,
    /// The responding character.
    pub character_id: CharacterId,
    /// Display name of the responding character.
    pub name: String,
    /// Response text. Never empty.
    pub content: String,
    /// When the response was created.
    pub timestamp: Timestamp,
}

impl CharacterResponse {
    /// Creates a response attributed to a persona, stamped now.
    pub fn new(persona: &Persona, content: impl Into<String>) -> Self {
        Self {
            id: ResponseId::new(),
            character_id: persona.effective_id().clone(),
            name: persona.display_name(),
            content: content.into(),
            timestamp: Timestamp::now(),
        }
    }
}

/// A persisted exchange: the user message plus the ordered character
/// responses. Mirrored into the cache with an expiry; the durable store
/// copy is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    /// Conversation this exchange belongs to.
    pub conversation_id: ConversationId,
    /// The original user message.
    pub message: String,
    /// Responses in request order.
    pub responses: Vec<CharacterResponse>,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub updated_at: Timestamp,
}

impl ConversationRecord {
    /// Creates a record for a freshly generated exchange, both timestamps
    /// stamped now.
    pub fn new(
        conversation_id: ConversationId,
        message: impl Into<String>,
        responses: Vec<CharacterResponse>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            conversation_id,
            message: message.into(),
            responses,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::character::resolve_builtin;

    fn socrates() -> Persona {
        resolve_builtin(&CharacterId::new("1").unwrap())
    }

    #[test]
    fn response_is_attributed_to_persona() {
        let response = CharacterResponse::new(&socrates(), "Know thyself.");
        assert_eq!(response.character_id.as_str(), "1");
        assert_eq!(response.name, "Socrates");
        assert_eq!(response.content, "Know thyself.");
    }

    #[test]
    fn responses_get_unique_ids() {
        let a = CharacterResponse::new(&socrates(), "one");
        let b = CharacterResponse::new(&socrates(), "two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = ConversationRecord::new(
            ConversationId::new("conv-1").unwrap(),
            "What is virtue?",
            vec![CharacterResponse::new(&socrates(), "A fine question.")],
        );

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ConversationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn record_serializes_camel_case_fields() {
        let record = ConversationRecord::new(
            ConversationId::new("conv-1").unwrap(),
            "hi",
            vec![CharacterResponse::new(&socrates(), "hello")],
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"conversationId\""));
        assert!(json.contains("\"characterId\""));
        assert!(json.contains("\"createdAt\""));
    }
}
