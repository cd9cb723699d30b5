//! In-memory implementations of the storage ports.
//!
//! Deterministic and synchronous under the hood, intended for unit and
//! integration tests and for running the service without Postgres or
//! Redis. Lock operations use `.expect()`; a poisoned lock is fine to
//! panic on in these contexts.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::character::Persona;
use crate::domain::conversation::ConversationRecord;
use crate::domain::foundation::{CharacterId, ConversationId};
use crate::ports::{
    CacheError, CharacterStore, CharacterStoreError, ConversationCache, ConversationStore,
    ConversationStoreError,
};

/// In-memory conversation store keyed by conversation id.
pub struct InMemoryConversationStore {
    records: RwLock<HashMap<ConversationId, ConversationRecord>>,
}

impl InMemoryConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored conversations (for test assertions).
    pub fn len(&self) -> usize {
        self.records
            .read()
            .expect("InMemoryConversationStore: lock poisoned")
            .len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn put(&self, record: &ConversationRecord) -> Result<(), ConversationStoreError> {
        self.records
            .write()
            .expect("InMemoryConversationStore: lock poisoned")
            .insert(record.conversation_id.clone(), record.clone());
        Ok(())
    }

    async fn get(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<ConversationRecord>, ConversationStoreError> {
        Ok(self
            .records
            .read()
            .expect("InMemoryConversationStore: lock poisoned")
            .get(conversation_id)
            .cloned())
    }
}

/// In-memory conversation cache. The TTL is recorded but never enforced;
/// tests that care about expiry inspect [`last_ttl`](Self::last_ttl).
pub struct InMemoryConversationCache {
    entries: RwLock<HashMap<ConversationId, ConversationRecord>>,
    last_ttl: RwLock<Option<Duration>>,
}

impl InMemoryConversationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            last_ttl: RwLock::new(None),
        }
    }

    /// Number of cached conversations (for test assertions).
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("InMemoryConversationCache: lock poisoned")
            .len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// TTL passed to the most recent `set` call.
    pub fn last_ttl(&self) -> Option<Duration> {
        *self
            .last_ttl
            .read()
            .expect("InMemoryConversationCache: lock poisoned")
    }
}

impl Default for InMemoryConversationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationCache for InMemoryConversationCache {
    async fn get(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<ConversationRecord>, CacheError> {
        Ok(self
            .entries
            .read()
            .expect("InMemoryConversationCache: lock poisoned")
            .get(conversation_id)
            .cloned())
    }

    async fn set(&self, record: &ConversationRecord, ttl: Duration) -> Result<(), CacheError> {
        self.entries
            .write()
            .expect("InMemoryConversationCache: lock poisoned")
            .insert(record.conversation_id.clone(), record.clone());
        *self
            .last_ttl
            .write()
            .expect("InMemoryConversationCache: lock poisoned") = Some(ttl);
        Ok(())
    }
}

/// In-memory character store. Looks personas up by legacy id first and
/// primary id second, mirroring the database adapter's key scheme.
pub struct InMemoryCharacterStore {
    personas: RwLock<Vec<Persona>>,
}

impl InMemoryCharacterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            personas: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store seeded with the given personas.
    pub fn with_personas(personas: Vec<Persona>) -> Self {
        Self {
            personas: RwLock::new(personas),
        }
    }

    /// Adds a persona.
    pub fn insert(&self, persona: Persona) {
        self.personas
            .write()
            .expect("InMemoryCharacterStore: lock poisoned")
            .push(persona);
    }
}

impl Default for InMemoryCharacterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterStore for InMemoryCharacterStore {
    async fn find_by_legacy_id(
        &self,
        id: &CharacterId,
    ) -> Result<Option<Persona>, CharacterStoreError> {
        Ok(self
            .personas
            .read()
            .expect("InMemoryCharacterStore: lock poisoned")
            .iter()
            .find(|p| p.legacy_id.as_ref() == Some(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Persona>, CharacterStoreError> {
        Ok(self
            .personas
            .read()
            .expect("InMemoryCharacterStore: lock poisoned")
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }
}
