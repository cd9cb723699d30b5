//! PostgreSQL implementation of CharacterStore.
//!
//! Characters are keyed two ways: `id` is the primary key and `legacy_id`
//! is an optional alternate key kept for clients that still send the
//! original numeric ids. The resolver probes the legacy key first.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::character::Persona;
use crate::domain::foundation::CharacterId;
use crate::ports::{CharacterStore, CharacterStoreError};

/// PostgreSQL implementation of CharacterStore.
#[derive(Clone)]
pub struct PostgresCharacterStore {
    pool: PgPool,
}

impl PostgresCharacterStore {
    /// Creates a new PostgresCharacterStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_by_column(
        &self,
        column: &str,
        id: &CharacterId,
    ) -> Result<Option<Persona>, CharacterStoreError> {
        let query = format!(
            r#"
            SELECT id, legacy_id, name, era, category, background, traits, image_url
            FROM characters
            WHERE {} = $1
            "#,
            column
        );

        let row = sqlx::query(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                CharacterStoreError::Database(format!("Failed to fetch character: {}", e))
            })?;

        row.map(row_to_persona).transpose()
    }
}

#[async_trait]
impl CharacterStore for PostgresCharacterStore {
    async fn find_by_legacy_id(
        &self,
        id: &CharacterId,
    ) -> Result<Option<Persona>, CharacterStoreError> {
        self.find_by_column("legacy_id", id).await
    }

    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Persona>, CharacterStoreError> {
        self.find_by_column("id", id).await
    }
}

fn row_to_persona(row: sqlx::postgres::PgRow) -> Result<Persona, CharacterStoreError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| CharacterStoreError::Corrupt(format!("Missing id column: {}", e)))?;
    let legacy_id: Option<String> = row
        .try_get("legacy_id")
        .map_err(|e| CharacterStoreError::Corrupt(format!("Missing legacy_id column: {}", e)))?;

    let id = CharacterId::new(id)
        .map_err(|e| CharacterStoreError::Corrupt(format!("Invalid character id: {}", e)))?;
    let legacy_id = legacy_id
        .map(CharacterId::new)
        .transpose()
        .map_err(|e| CharacterStoreError::Corrupt(format!("Invalid legacy id: {}", e)))?;

    Ok(Persona {
        id,
        legacy_id,
        name: row
            .try_get("name")
            .map_err(|e| CharacterStoreError::Corrupt(format!("Missing name column: {}", e)))?,
        era: row.try_get("era").unwrap_or(None),
        category: row.try_get("category").unwrap_or(None),
        background: row.try_get("background").unwrap_or(None),
        traits: row.try_get::<Option<Vec<String>>, _>("traits").unwrap_or(None).unwrap_or_default(),
        image_url: row.try_get("image_url").unwrap_or(None),
    })
}
