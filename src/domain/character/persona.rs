//! Persona value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CharacterId;

/// Identity record for a historical-figure character.
///
/// Sourced from the durable store or the built-in registry and never
/// mutated by the conversation flow. The `legacy_id` alias exists because
/// older storage rows are keyed by a different field name than `id`; both
/// resolve to the same persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Primary identifier.
    pub id: CharacterId,
    /// Alternate identifier alias used by legacy storage rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<CharacterId>,
    /// Display name. May be empty at the source; use [`Persona::display_name`].
    pub name: String,
    /// Historical era, e.g. "Ancient Greece".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    /// Category/domain tag, e.g. "Philosophy".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text background narrative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Short trait descriptors, in display order.
    #[serde(default)]
    pub traits: Vec<String>,
    /// Reference to a portrait image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Persona {
    /// Returns the identifier used to attribute responses: the legacy alias
    /// when present, otherwise the primary id.
    pub fn effective_id(&self) -> &CharacterId {
        self.legacy_id.as_ref().unwrap_or(&self.id)
    }

    /// Returns a usable display name, synthesizing one from the identifier
    /// when the record carries none.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Character {}", self.effective_id())
        } else {
            self.name.clone()
        }
    }

    /// Returns the first sentence of the background, split on the first
    /// period, or `None` when there is no background.
    pub fn background_lead(&self) -> Option<&str> {
        self.background
            .as_deref()
            .map(|b| b.split('.').next().unwrap_or(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(name: &str) -> Persona {
        Persona {
            id: CharacterId::new("42").unwrap(),
            legacy_id: None,
            name: name.to_string(),
            era: None,
            category: None,
            background: None,
            traits: Vec::new(),
            image_url: None,
        }
    }

    #[test]
    fn display_name_uses_record_name() {
        assert_eq!(persona("Hypatia").display_name(), "Hypatia");
    }

    #[test]
    fn display_name_synthesized_when_name_empty() {
        assert_eq!(persona("").display_name(), "Character 42");
        assert_eq!(persona("   ").display_name(), "Character 42");
    }

    #[test]
    fn effective_id_prefers_legacy_alias() {
        let mut p = persona("Hypatia");
        p.legacy_id = Some(CharacterId::new("legacy-42").unwrap());
        assert_eq!(p.effective_id().as_str(), "legacy-42");
    }

    #[test]
    fn effective_id_falls_back_to_primary() {
        assert_eq!(persona("Hypatia").effective_id().as_str(), "42");
    }

    #[test]
    fn background_lead_splits_on_first_period() {
        let mut p = persona("Hypatia");
        p.background = Some("Philosopher of Alexandria. Also an astronomer.".to_string());
        assert_eq!(p.background_lead(), Some("Philosopher of Alexandria"));
    }

    #[test]
    fn background_lead_none_without_background() {
        assert_eq!(persona("Hypatia").background_lead(), None);
    }

    #[test]
    fn persona_deserializes_with_missing_optionals() {
        let json = r#"{"id":"7","name":"Ada Lovelace"}"#;
        let p: Persona = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Ada Lovelace");
        assert!(p.traits.is_empty());
        assert!(p.era.is_none());
    }
}
