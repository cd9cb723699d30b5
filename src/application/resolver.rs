//! Character resolution: identifiers to personas.
//!
//! Resolution is total and order-preserving. The durable store is consulted
//! first (legacy key, then primary key); any miss or store failure degrades
//! to the built-in registry, which itself synthesizes a generic persona for
//! unknown ids. No error ever propagates out of resolution.

use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use crate::domain::character::{resolve_builtin, Persona};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterStore;

/// Resolves character identifiers to persona records.
#[derive(Clone)]
pub struct CharacterResolver {
    store: Option<Arc<dyn CharacterStore>>,
}

impl CharacterResolver {
    /// Creates a resolver backed only by the built-in registry.
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Attaches a durable character store, consulted before the registry.
    pub fn with_store(mut self, store: Arc<dyn CharacterStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Resolves a single identifier. Always succeeds with some persona.
    pub async fn resolve(&self, id: &CharacterId) -> Persona {
        if let Some(store) = &self.store {
            // Two-step lookup: legacy alias key first, then the primary id.
            match store.find_by_legacy_id(id).await {
                Ok(Some(persona)) => return persona,
                Ok(None) => match store.find_by_id(id).await {
                    Ok(Some(persona)) => return persona,
                    Ok(None) => {}
                    Err(error) => {
                        warn!(character_id = %id, %error, "character store lookup failed, using built-in registry");
                    }
                },
                Err(error) => {
                    warn!(character_id = %id, %error, "character store lookup failed, using built-in registry");
                }
            }
        }

        resolve_builtin(id)
    }

    /// Resolves a sequence of identifiers, preserving input order.
    ///
    /// Duplicates are resolved independently; the output length always
    /// equals the input length.
    pub async fn resolve_all(&self, ids: &[CharacterId]) -> Vec<Persona> {
        join_all(ids.iter().map(|id| self.resolve(id))).await
    }
}

impl Default for CharacterResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CharacterStoreError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store stub that records which lookup keys were tried.
    struct ScriptedStore {
        by_legacy: Option<Persona>,
        by_primary: Option<Persona>,
        fail: bool,
        legacy_calls: AtomicUsize,
        primary_calls: AtomicUsize,
    }

    impl ScriptedStore {
        fn empty() -> Self {
            Self {
                by_legacy: None,
                by_primary: None,
                fail: false,
                legacy_calls: AtomicUsize::new(0),
                primary_calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::empty()
            }
        }

        fn stored(id: &str, name: &str) -> Persona {
            Persona {
                id: CharacterId::new(id).unwrap(),
                legacy_id: None,
                name: name.to_string(),
                era: Some("Stored Era".to_string()),
                category: None,
                background: None,
                traits: Vec::new(),
                image_url: None,
            }
        }
    }

    #[async_trait]
    impl CharacterStore for ScriptedStore {
        async fn find_by_legacy_id(
            &self,
            _id: &CharacterId,
        ) -> Result<Option<Persona>, CharacterStoreError> {
            self.legacy_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CharacterStoreError::Database("boom".into()));
            }
            Ok(self.by_legacy.clone())
        }

        async fn find_by_id(
            &self,
            _id: &CharacterId,
        ) -> Result<Option<Persona>, CharacterStoreError> {
            self.primary_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CharacterStoreError::Database("boom".into()));
            }
            Ok(self.by_primary.clone())
        }
    }

    fn id(s: &str) -> CharacterId {
        CharacterId::new(s).unwrap()
    }

    #[tokio::test]
    async fn without_store_resolves_from_registry() {
        let resolver = CharacterResolver::new();
        let persona = resolver.resolve(&id("1")).await;
        assert_eq!(persona.name, "Socrates");
    }

    #[tokio::test]
    async fn store_hit_on_legacy_key_short_circuits() {
        let store = Arc::new(ScriptedStore {
            by_legacy: Some(ScriptedStore::stored("1", "Store Socrates")),
            ..ScriptedStore::empty()
        });
        let resolver = CharacterResolver::new().with_store(store.clone());

        let persona = resolver.resolve(&id("1")).await;
        assert_eq!(persona.name, "Store Socrates");
        assert_eq!(store.legacy_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.primary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn legacy_miss_falls_through_to_primary_key() {
        let store = Arc::new(ScriptedStore {
            by_primary: Some(ScriptedStore::stored("1", "Primary Socrates")),
            ..ScriptedStore::empty()
        });
        let resolver = CharacterResolver::new().with_store(store.clone());

        let persona = resolver.resolve(&id("1")).await;
        assert_eq!(persona.name, "Primary Socrates");
        assert_eq!(store.legacy_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.primary_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn double_miss_falls_back_to_registry() {
        let resolver = CharacterResolver::new().with_store(Arc::new(ScriptedStore::empty()));
        let persona = resolver.resolve(&id("2")).await;
        assert_eq!(persona.name, "Marie Curie");
    }

    #[tokio::test]
    async fn store_failure_degrades_to_registry() {
        let resolver = CharacterResolver::new().with_store(Arc::new(ScriptedStore::failing()));
        let persona = resolver.resolve(&id("3")).await;
        assert_eq!(persona.name, "Sun Tzu");
    }

    #[tokio::test]
    async fn unknown_id_resolves_to_synthesized_persona() {
        let resolver = CharacterResolver::new().with_store(Arc::new(ScriptedStore::empty()));
        let persona = resolver.resolve(&id("no-such-character")).await;
        assert_eq!(persona.name, "Character no-such-character");
    }

    #[tokio::test]
    async fn resolve_all_preserves_order_and_length() {
        let resolver = CharacterResolver::new();
        let ids = vec![id("3"), id("1"), id("3"), id("99")];
        let personas = resolver.resolve_all(&ids).await;

        assert_eq!(personas.len(), 4);
        assert_eq!(personas[0].name, "Sun Tzu");
        assert_eq!(personas[1].name, "Socrates");
        assert_eq!(personas[2].name, "Sun Tzu");
        assert_eq!(personas[3].name, "Character 99");
    }
}
