//! Application layer - the conversation flow use cases.

mod flow;
mod generator;
mod resolver;

pub use flow::{ConversationFlow, ProcessMessageRequest, ProcessMessageResult};
pub use generator::ResponseGenerator;
pub use resolver::CharacterResolver;
