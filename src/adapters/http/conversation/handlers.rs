//! HTTP handlers for the conversation endpoints.
//!
//! These handlers connect Axum routes to the conversation flow. Invalid
//! input maps to 400, an unknown conversation to 404; generation and
//! persistence failures never surface here because the flow degrades them
//! internally.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::{ConversationFlow, ProcessMessageRequest};
use crate::domain::character::builtin_personas;
use crate::domain::foundation::{CharacterId, ConversationId};

use super::dto::{
    CharacterView, ConversationView, ErrorResponse, SendMessageRequest, SendMessageResponse,
};

/// Shared application state for conversation handlers.
#[derive(Clone)]
pub struct ConversationAppState {
    pub flow: Arc<ConversationFlow>,
}

impl ConversationAppState {
    /// Creates a new ConversationAppState.
    pub fn new(flow: Arc<ConversationFlow>) -> Self {
        Self { flow }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/conversation
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/conversation - Send a message to a set of characters.
///
/// # Errors
/// - 400 Bad Request: empty message, empty character list, or malformed ids
pub async fn send_message(
    State(state): State<ConversationAppState>,
    Json(body): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, ConversationApiError> {
    let characters = body
        .characters
        .into_iter()
        .map(CharacterId::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ConversationApiError::BadRequest(format!("Invalid character id: {}", e)))?;

    let conversation_id = body
        .conversation_id
        .map(ConversationId::new)
        .transpose()
        .map_err(|e| ConversationApiError::BadRequest(format!("Invalid conversation id: {}", e)))?;

    let mut request = ProcessMessageRequest::new(body.message, characters);
    if let Some(id) = conversation_id {
        request = request.with_conversation_id(id);
    }
    if let Some(options) = body.options {
        request = request.with_options(options.into());
    }

    let result = state
        .flow
        .process_message(request)
        .await
        .map_err(|e| ConversationApiError::BadRequest(e.to_string()))?;

    let response = SendMessageResponse {
        conversation_id: result.conversation_id.to_string(),
        responses: result.responses.iter().map(Into::into).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /api/conversation/{id}
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/conversation/{id} - Retrieve a stored conversation.
///
/// # Errors
/// - 400 Bad Request: malformed conversation id
/// - 404 Not Found: no tier holds the conversation
pub async fn get_conversation(
    State(state): State<ConversationAppState>,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ConversationApiError> {
    let conversation_id = ConversationId::new(conversation_id)
        .map_err(|e| ConversationApiError::BadRequest(format!("Invalid conversation id: {}", e)))?;

    let record = state
        .flow
        .get_conversation_history(&conversation_id)
        .await
        .ok_or_else(|| {
            ConversationApiError::NotFound("Conversation".to_string(), conversation_id.to_string())
        })?;

    Ok((StatusCode::OK, Json(ConversationView::from(&record))))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /api/characters
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/characters - List the built-in characters.
pub async fn list_characters() -> impl IntoResponse {
    let views: Vec<CharacterView> = builtin_personas().iter().map(Into::into).collect();
    (StatusCode::OK, Json(views))
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /health
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

// ════════════════════════════════════════════════════════════════════════════════
// API Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Errors surfaced by the conversation API.
#[derive(Debug)]
pub enum ConversationApiError {
    BadRequest(String),
    NotFound(String, String),
    Internal(String),
}

impl IntoResponse for ConversationApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ConversationApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ConversationApiError::NotFound(resource, id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(&resource, &id))
            }
            ConversationApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
