//! Redis adapters for the cache port.

mod conversation_cache;

pub use conversation_cache::RedisConversationCache;
