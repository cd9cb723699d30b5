//! Character module - Personas and their voices.
//!
//! A `Persona` is the read-only identity record behind each participant at
//! the round table. The registry holds the built-in personas; the prompt
//! module turns a persona into an AI system prompt or a deterministic
//! fallback reply.

mod persona;
mod prompt;
mod registry;

pub use persona::Persona;
pub use prompt::{fallback_reply, system_prompt, unavailable_reply};
pub use registry::{builtin_personas, resolve_builtin};
