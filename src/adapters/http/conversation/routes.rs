//! Axum routes for the conversation API.
//!
//! REST Endpoints:
//! - POST /api/conversation - Send a message to a set of characters
//! - GET /api/conversation/:id - Retrieve a stored conversation
//! - GET /api/characters - List the built-in characters
//! - GET /health - Liveness probe

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_conversation, health, list_characters, send_message, ConversationAppState,
};

/// Creates routes for conversation endpoints.
pub fn conversation_routes() -> Router<ConversationAppState> {
    Router::new()
        .route("/conversation", post(send_message))
        .route("/conversation/:conversation_id", get(get_conversation))
        .route("/characters", get(list_characters))
}

/// Combined router: API routes under /api plus the health probe.
pub fn api_router() -> Router<ConversationAppState> {
    Router::new()
        .nest("/api", conversation_routes())
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_routes_creates_valid_router() {
        let _routes = conversation_routes();
    }

    #[test]
    fn api_router_creates_combined_router() {
        let _router = api_router();
    }
}
