//! Built-in persona registry.
//!
//! The static table of round-table regulars used when the durable store is
//! absent, unreachable, or has no row for a requested id. Lookup is total:
//! unknown ids resolve to a synthesized generic persona.

use once_cell::sync::Lazy;

use crate::domain::foundation::CharacterId;

use super::Persona;

static BUILTIN: Lazy<Vec<Persona>> = Lazy::new(|| {
    vec![
        builtin(
            "1",
            "Socrates",
            "Ancient Greece",
            "Philosophy",
            "Classical Greek philosopher credited as one of the founders of Western philosophy.",
            &["philosophical", "questioning"],
            "/images/characters/socrates.jpg",
        ),
        builtin(
            "2",
            "Marie Curie",
            "Modern Era",
            "Science",
            "Physicist and chemist who conducted pioneering research on radioactivity.",
            &["scientific", "determined"],
            "/images/characters/marie-curie.jpg",
        ),
        builtin(
            "3",
            "Sun Tzu",
            "Ancient China",
            "Strategy",
            "Chinese general, military strategist, writer, and philosopher known for \"The Art of War\".",
            &["strategic", "wise"],
            "/images/characters/sun-tzu.jpg",
        ),
        builtin(
            "4",
            "Leonardo da Vinci",
            "Renaissance",
            "Art",
            "Italian polymath of the Renaissance whose areas of interest included invention, drawing, painting, and sculpture.",
            &["creative", "inventive"],
            "/images/characters/leonardo.jpg",
        ),
        builtin(
            "5",
            "William Shakespeare",
            "Elizabethan Era",
            "Literature",
            "English playwright, poet, and actor, widely regarded as the greatest writer in the English language.",
            &["poetic", "dramatic"],
            "/images/characters/shakespeare.jpg",
        ),
    ]
});

fn builtin(
    id: &str,
    name: &str,
    era: &str,
    category: &str,
    background: &str,
    traits: &[&str],
    image_url: &str,
) -> Persona {
    let id = CharacterId::new(id).expect("built-in persona id is non-empty");
    Persona {
        legacy_id: Some(id.clone()),
        id,
        name: name.to_string(),
        era: Some(era.to_string()),
        category: Some(category.to_string()),
        background: Some(background.to_string()),
        traits: traits.iter().map(|t| t.to_string()).collect(),
        image_url: Some(image_url.to_string()),
    }
}

/// Returns the built-in personas in display order.
pub fn builtin_personas() -> &'static [Persona] {
    &BUILTIN
}

/// Resolves an identifier against the built-in table.
///
/// Total: ids outside the table synthesize a generic persona so callers
/// always receive a usable record.
pub fn resolve_builtin(id: &CharacterId) -> Persona {
    BUILTIN
        .iter()
        .find(|p| p.id == *id || p.legacy_id.as_ref() == Some(id))
        .cloned()
        .unwrap_or_else(|| generic_persona(id))
}

fn generic_persona(id: &CharacterId) -> Persona {
    Persona {
        id: id.clone(),
        legacy_id: Some(id.clone()),
        name: format!("Character {}", id),
        era: Some("Unknown".to_string()),
        category: Some("Other".to_string()),
        background: Some("A historical figure".to_string()),
        traits: Vec::new(),
        image_url: Some("/images/characters/default.jpg".to_string()),
    }
}
