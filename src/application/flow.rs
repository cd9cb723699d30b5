//! The conversation flow orchestrator.
//!
//! `process_message` is the write path: validate, resolve personas,
//! generate one response per character concurrently, assemble in input
//! order, then best-effort persist and cache. `get_conversation_history`
//! is the read path: cache first, then store, repopulating the cache on a
//! store hit.
//!
//! Only input validation errors cross this boundary. Generation failures
//! become fallback replies, persistence failures are logged and swallowed
//! (at-most-once, no retries), and a missing history is an absence rather
//! than an error.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::domain::character::unavailable_reply;
use crate::domain::conversation::{
    CharacterResponse, ConversationError, ConversationRecord, GenerationOptions,
};
use crate::domain::foundation::{CharacterId, ConversationId};
use crate::ports::{ConversationCache, ConversationStore};

use super::{CharacterResolver, ResponseGenerator};

/// Default cache expiry for conversation records.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Input to [`ConversationFlow::process_message`].
#[derive(Debug, Clone)]
pub struct ProcessMessageRequest {
    /// The user's message.
    pub message: String,
    /// Characters to answer, in response order. Duplicates are allowed.
    pub characters: Vec<CharacterId>,
    /// Conversation to continue; a fresh id is generated when absent.
    pub conversation_id: Option<ConversationId>,
    /// Generation parameter overrides.
    pub options: GenerationOptions,
}

impl ProcessMessageRequest {
    /// Creates a request with default options and a generated conversation id.
    pub fn new(message: impl Into<String>, characters: Vec<CharacterId>) -> Self {
        Self {
            message: message.into(),
            characters,
            conversation_id: None,
            options: GenerationOptions::default(),
        }
    }

    /// Continues an existing conversation.
    pub fn with_conversation_id(mut self, id: ConversationId) -> Self {
        self.conversation_id = Some(id);
        self
    }

    /// Sets generation parameter overrides.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

/// Output of [`ConversationFlow::process_message`].
#[derive(Debug, Clone)]
pub struct ProcessMessageResult {
    /// The conversation id used (supplied or generated).
    pub conversation_id: ConversationId,
    /// One response per requested character, in request order.
    pub responses: Vec<CharacterResponse>,
}

/// Orchestrates one round of conversation with the round table.
#[derive(Clone)]
pub struct ConversationFlow {
    resolver: CharacterResolver,
    generator: ResponseGenerator,
    store: Option<Arc<dyn ConversationStore>>,
    cache: Option<Arc<dyn ConversationCache>>,
    cache_ttl: Duration,
}

impl ConversationFlow {
    /// Creates a flow with no persistence backends.
    pub fn new(resolver: CharacterResolver, generator: ResponseGenerator) -> Self {
        Self {
            resolver,
            generator,
            store: None,
            cache: None,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Attaches a durable conversation store.
    pub fn with_store(mut self, store: Arc<dyn ConversationStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Attaches a conversation cache.
    pub fn with_cache(mut self, cache: Arc<dyn ConversationCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Overrides the cache expiry (default one hour).
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Processes a user message and generates one response per character.
    ///
    /// The response list always has exactly one entry per requested
    /// character id, in request order, even when individual generations
    /// fail or panic.
    pub async fn process_message(
        &self,
        request: ProcessMessageRequest,
    ) -> Result<ProcessMessageResult, ConversationError> {
        if request.message.trim().is_empty() {
            return Err(ConversationError::EmptyMessage);
        }
        if request.characters.is_empty() {
            return Err(ConversationError::NoCharacters);
        }

        let conversation_id = request
            .conversation_id
            .unwrap_or_else(ConversationId::generate);

        info!(
            conversation_id = %conversation_id,
            characters = ?request.characters.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
            "processing message"
        );

        let personas = self.resolver.resolve_all(&request.characters).await;

        // Fan out one generation task per persona. Tasks are isolated so a
        // panic in one cannot take down the others; a failed task yields a
        // "technical difficulties" reply attributed to its persona.
        let handles: Vec<_> = personas
            .iter()
            .map(|persona| {
                let generator = self.generator.clone();
                let message = request.message.clone();
                let options = request.options.clone();
                let persona = persona.clone();
                tokio::spawn(async move {
                    let content = generator.generate(&message, &persona, &options).await;
                    CharacterResponse::new(&persona, content)
                })
            })
            .collect();

        let mut responses = Vec::with_capacity(handles.len());
        for (handle, persona) in handles.into_iter().zip(&personas) {
            match handle.await {
                Ok(response) => responses.push(response),
                Err(join_error) => {
                    error!(
                        conversation_id = %conversation_id,
                        character = %persona.display_name(),
                        %join_error,
                        "response generation task failed"
                    );
                    responses.push(CharacterResponse::new(persona, unavailable_reply(persona)));
                }
            }
        }

        let record =
            ConversationRecord::new(conversation_id.clone(), &request.message, responses.clone());
        self.persist(&record).await;

        Ok(ProcessMessageResult {
            conversation_id,
            responses,
        })
    }

    /// Retrieves a previously stored conversation, or `None` when no tier
    /// has it. Transport errors are treated as misses for their tier.
    pub async fn get_conversation_history(
        &self,
        conversation_id: &ConversationId,
    ) -> Option<ConversationRecord> {
        if let Some(cache) = &self.cache {
            match cache.get(conversation_id).await {
                Ok(Some(record)) => {
                    info!(conversation_id = %conversation_id, "retrieved conversation from cache");
                    return Some(record);
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(conversation_id = %conversation_id, %error, "cache read failed, falling through to store");
                }
            }
        }

        if let Some(store) = &self.store {
            match store.get(conversation_id).await {
                Ok(Some(record)) => {
                    info!(conversation_id = %conversation_id, "retrieved conversation from store");
                    if let Some(cache) = &self.cache {
                        if let Err(error) = cache.set(&record, self.cache_ttl).await {
                            warn!(conversation_id = %conversation_id, %error, "failed to repopulate cache");
                        }
                    }
                    return Some(record);
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(conversation_id = %conversation_id, %error, "store read failed");
                }
            }
        }

        warn!(conversation_id = %conversation_id, "conversation not found");
        None
    }

    /// Best-effort persistence: at most one store write and one cache write,
    /// no retries, failures logged only.
    async fn persist(&self, record: &ConversationRecord) {
        if let Some(store) = &self.store {
            match store.put(record).await {
                Ok(()) => {
                    info!(conversation_id = %record.conversation_id, "saved conversation to store")
                }
                Err(error) => {
                    error!(conversation_id = %record.conversation_id, %error, "failed to save conversation")
                }
            }
        }

        if let Some(cache) = &self.cache {
            match cache.set(record, self.cache_ttl).await {
                Ok(()) => {
                    info!(conversation_id = %record.conversation_id, "cached conversation")
                }
                Err(error) => {
                    error!(conversation_id = %record.conversation_id, %error, "failed to cache conversation")
                }
            }
        }
    }
}
