//! HTTP DTOs for the conversation endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution. Timestamps are rendered as ISO-8601 strings with a `Z` suffix.

use serde::{Deserialize, Serialize};

use crate::domain::character::Persona;
use crate::domain::conversation::{CharacterResponse, ConversationRecord, GenerationOptions};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of POST /api/conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// The user's message.
    pub message: String,
    /// Character ids to ask, in response order.
    pub characters: Vec<String>,
    /// Conversation to continue; omitted for a new conversation.
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Generation parameter overrides.
    #[serde(default)]
    pub options: Option<GenerationOptionsDto>,
}

/// Generation overrides in the request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptionsDto {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl From<GenerationOptionsDto> for GenerationOptions {
    fn from(dto: GenerationOptionsDto) -> Self {
        GenerationOptions {
            model: dto.model,
            temperature: dto.temperature,
            max_tokens: dto.max_tokens,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of a successful POST /api/conversation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    /// Conversation id (supplied or generated).
    pub conversation_id: String,
    /// One response per requested character, in request order.
    pub responses: Vec<CharacterResponseView>,
}

/// View of a single character response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponseView {
    pub id: String,
    pub character_id: String,
    pub name: String,
    pub content: String,
    pub timestamp: String,
}

impl From<&CharacterResponse> for CharacterResponseView {
    fn from(response: &CharacterResponse) -> Self {
        Self {
            id: response.id.to_string(),
            character_id: response.character_id.to_string(),
            name: response.name.clone(),
            content: response.content.clone(),
            timestamp: response.timestamp.to_iso8601(),
        }
    }
}

/// View of a stored conversation for GET /api/conversation/{id}.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub conversation_id: String,
    pub message: String,
    pub responses: Vec<CharacterResponseView>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ConversationRecord> for ConversationView {
    fn from(record: &ConversationRecord) -> Self {
        Self {
            conversation_id: record.conversation_id.to_string(),
            message: record.message.clone(),
            responses: record.responses.iter().map(Into::into).collect(),
            created_at: record.created_at.to_iso8601(),
            updated_at: record.updated_at.to_iso8601(),
        }
    }
}

/// View of a character for GET /api/characters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub traits: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&Persona> for CharacterView {
    fn from(persona: &Persona) -> Self {
        Self {
            id: persona.effective_id().to_string(),
            name: persona.display_name(),
            era: persona.era.clone(),
            category: persona.category.clone(),
            background: persona.background.clone(),
            traits: persona.traits.clone(),
            image_url: persona.image_url.clone(),
        }
    }
}

/// Error body returned by all endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
