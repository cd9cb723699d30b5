//! HTTP adapter for the conversation endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ConversationAppState;
pub use routes::api_router;
