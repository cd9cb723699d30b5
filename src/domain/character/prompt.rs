//! Prompt construction and deterministic fallback replies.
//!
//! Everything here is pure: no I/O, no clock, no randomness. The fallback
//! reply is the degraded-mode path taken when the completion provider is
//! unconfigured or failing, so identical inputs must yield identical output.

use super::Persona;

/// Builds the system prompt that puts the model in a persona's voice.
pub fn system_prompt(persona: &Persona) -> String {
    let name = persona.display_name();
    let era = persona.era.as_deref().unwrap_or("Unknown Era");

    let identity = match persona.background.as_deref() {
        Some(background) => {
            format!("{} ({}) who {}", name, era, background.trim_end_matches('.'))
        }
        None => format!("{} from {}", name, era),
    };

    let traits_clause = if persona.traits.is_empty() {
        String::new()
    } else {
        format!("Known for being {}. ", persona.traits.join(", "))
    };

    format!(
        "You are {}. {}Respond as this historical figure would, with their \
         speaking style, knowledge, and perspectives limited to what they \
         would have known in their time period. Keep responses concise \
         (2-3 paragraphs maximum).",
        identity, traits_clause
    )
}

/// Generates the deterministic reply used when no AI response is available.
///
/// The round-table regulars get curated replies in their own voice; anyone
/// else gets a generic template interpolating the persona's name, the first
/// sentence of its background, and the literal user message.
pub fn fallback_reply(message: &str, persona: &Persona) -> String {
    match persona.effective_id().as_str() {
        "1" => format!(
            "I must question you on this: \"{}\". What do you truly mean by that? \
             As I always say, the unexamined life is not worth living.",
            message
        ),
        "2" => format!(
            "Interesting question: \"{}\". In my scientific observations, I have \
             found that one must never lose curiosity. Nothing in life is to be \
             feared, it is only to be understood.",
            message
        ),
        "3" => format!(
            "When you ask \"{}\", you must consider the strategic implications. \
             Know yourself, know your enemy, and you need not fear the result of \
             a hundred battles.",
            message
        ),
        "4" => format!(
            "Your inquiry about \"{}\" fascinates me. I believe simplicity is the \
             ultimate sophistication. Let us examine this from multiple perspectives.",
            message
        ),
        "5" => format!(
            "To ponder \"{}\" or not to ponder, that is the question! All the \
             world's a stage, and all the men and women merely players. Let me \
             share my thoughts on this matter.",
            message
        ),
        _ => match persona.background_lead() {
            Some(lead) => format!(
                "As {}, {}. I find your question about \"{}\" most intriguing.",
                persona.display_name(),
                lead,
                message
            ),
            None => format!(
                "This is a response from {} to your message: \"{}\"",
                persona.display_name(),
                message
            ),
        },
    }
}

/// Reply attributed to a persona whose generation failed outright.
pub fn unavailable_reply(persona: &Persona) -> String {
    format!(
        "As {}, I'm afraid I cannot respond at the moment due to technical difficulties.",
        persona.display_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::character::resolve_builtin;
    use crate::domain::foundation::CharacterId;
    use proptest::prelude::*;

    fn persona(id: &str) -> Persona {
        resolve_builtin(&CharacterId::new(id).unwrap())
    }

    #[test]
    fn system_prompt_includes_name_era_and_background() {
        let prompt = system_prompt(&persona("1"));
        assert!(prompt.starts_with("You are Socrates (Ancient Greece) who Classical Greek"));
        assert!(prompt.contains("Known for being philosophical, questioning."));
        assert!(prompt.contains("2-3 paragraphs maximum"));
    }

    #[test]
    fn system_prompt_without_background_uses_from_form() {
        let p = Persona {
            id: CharacterId::new("7").unwrap(),
            legacy_id: None,
            name: "Hypatia".to_string(),
            era: Some("Late Antiquity".to_string()),
            category: None,
            background: None,
            traits: Vec::new(),
            image_url: None,
        };
        let prompt = system_prompt(&p);
        assert!(prompt.starts_with("You are Hypatia from Late Antiquity."));
        assert!(!prompt.contains("Known for being"));
    }

    #[test]
    fn system_prompt_without_era_says_unknown_era() {
        let p = Persona {
            id: CharacterId::new("7").unwrap(),
            legacy_id: None,
            name: "Hypatia".to_string(),
            era: None,
            category: None,
            background: None,
            traits: Vec::new(),
            image_url: None,
        };
        assert!(system_prompt(&p).contains("from Unknown Era"));
    }

    #[test]
    fn socratic_reply_quotes_the_message() {
        let reply = fallback_reply("What is virtue?", &persona("1"));
        assert!(reply.contains("\"What is virtue?\""));
        assert!(reply.contains("the unexamined life is not worth living"));
    }

    #[test]
    fn each_builtin_has_a_distinct_curated_reply() {
        let replies: Vec<String> = ["1", "2", "3", "4", "5"]
            .iter()
            .map(|id| fallback_reply("hello", &persona(id)))
            .collect();
        for (i, a) in replies.iter().enumerate() {
            assert!(a.contains("hello"));
            for b in replies.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_persona_uses_generic_template_with_background_lead() {
        let reply = fallback_reply("why?", &persona("99"));
        assert_eq!(
            reply,
            "As Character 99, A historical figure. I find your question about \"why?\" most intriguing."
        );
    }

    #[test]
    fn unknown_persona_without_background_uses_plain_template() {
        let p = Persona {
            id: CharacterId::new("77").unwrap(),
            legacy_id: None,
            name: "Nameless".to_string(),
            era: None,
            category: None,
            background: None,
            traits: Vec::new(),
            image_url: None,
        };
        let reply = fallback_reply("hi", &p);
        assert_eq!(reply, "This is a response from Nameless to your message: \"hi\"");
    }

    #[test]
    fn unavailable_reply_names_the_persona() {
        let reply = unavailable_reply(&persona("3"));
        assert!(reply.starts_with("As Sun Tzu,"));
        assert!(reply.contains("technical difficulties"));
    }

    proptest! {
        #[test]
        fn fallback_reply_is_deterministic(message in ".*", id in "[a-zA-Z0-9]{1,8}") {
            let p = resolve_builtin(&CharacterId::new(id).unwrap());
            prop_assert_eq!(fallback_reply(&message, &p), fallback_reply(&message, &p));
        }

        #[test]
        fn fallback_reply_is_never_empty(message in ".*", id in "[a-zA-Z0-9]{1,8}") {
            let p = resolve_builtin(&CharacterId::new(id).unwrap());
            prop_assert!(!fallback_reply(&message, &p).is_empty());
        }
    }
}
