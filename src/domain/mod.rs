//! Domain layer - pure types and logic, no I/O.

pub mod character;
pub mod conversation;
pub mod foundation;
