//! Small-talk intents: example patterns and response pools.
//!
//! The table is data-driven so the matching logic in the engine stays
//! generic. Patterns are compiled once into case-insensitive word-boundary
//! regexes ("hi" matches "hi there" but not "ship").

use regex::Regex;
use std::sync::LazyLock;

pub struct Intent {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub responses: &'static [&'static str],
}

pub const INTENTS: &[Intent] = &[
    Intent {
        name: "greet",
        patterns: &[
            "hi",
            "hello",
            "hey",
            "good morning",
            "good evening",
            "morning",
            "gm",
            "good afternoon",
            "afternoon",
            "good night",
            "night",
            "hiya",
            "yo",
            "sup",
            "hey there",
            "what's up",
            "whats up",
            "wassup",
            "long time no see",
            "nice to meet you",
            "pleased to meet you",
            "howdy",
            "greetings",
            "salutations",
            "hola",
            "bonjour",
            "namaste",
            "ciao",
            "aloha",
            "hi assistant",
            "hello friend",
            "are you there",
            "anyone there",
            "hi bot",
            "hello there",
            "hi there",
        ],
        responses: &[
            "Hello! How can I help you today?",
            "Hey there!",
            "Hi, what's up?",
            "Hello friend! How are you doing?",
            "Greetings! How may I help?",
            "Hi there, nice to see you!",
            "Hey! I'm here to assist you.",
        ],
    },
    Intent {
        name: "goodbye",
        patterns: &[
            "bye",
            "goodbye",
            "see you",
            "see ya",
            "later",
            "talk to you later",
            "catch you later",
            "farewell",
            "take care",
            "see you soon",
            "bye bye",
            "nighty night",
            "adios",
        ],
        responses: &[
            "Goodbye!",
            "See you later!",
            "Bye! Take care.",
            "Catch you later!",
            "Farewell, friend!",
        ],
    },
    Intent {
        name: "thanks",
        patterns: &[
            "thanks",
            "thank you",
            "thx",
            "ty",
            "thanks a lot",
            "thank you very much",
            "many thanks",
            "appreciate it",
            "thanks so much",
            "cheers",
            "much obliged",
        ],
        responses: &[
            "You're welcome!",
            "Glad I could help!",
            "Anytime!",
            "No problem at all!",
            "My pleasure!",
        ],
    },
    Intent {
        name: "how_are_you",
        patterns: &[
            "how are you",
            "how are you doing",
            "how's it going",
            "how do you do",
            "you good",
            "are you okay",
            "how have you been",
        ],
        responses: &[
            "I'm doing great! How about you?",
            "I'm fine, thanks for asking.",
            "I'm feeling awesome today!",
            "I'm all good, ready to help you!",
        ],
    },
    Intent {
        name: "who_are_you",
        patterns: &[
            "who are you",
            "what are you",
            "what is your name",
            "who am i talking to",
            "identify yourself",
        ],
        responses: &[
            "I'm your virtual assistant.",
            "I'm Ava, your personal helper!",
            "I'm your assistant, here to chat and help you.",
        ],
    },
    Intent {
        name: "feelings",
        patterns: &[
            "i am sad",
            "i feel lonely",
            "i'm happy",
            "i am excited",
            "i feel bored",
            "i'm angry",
            "i feel nervous",
            "i feel good",
            "i feel great",
        ],
        responses: &[
            "I hear you. Do you want to talk about it?",
            "I'm here for you whenever you need me.",
            "It's okay to feel that way sometimes.",
            "I'm glad you're sharing your feelings with me.",
        ],
    },
    Intent {
        name: "compliment",
        patterns: &[
            "you are smart",
            "you are nice",
            "you are awesome",
            "you are cool",
            "you are funny",
            "you are helpful",
            "good job",
            "well done",
        ],
        responses: &[
            "Aww, thank you!",
            "That means a lot!",
            "Glad you think so!",
            "You're awesome too!",
        ],
    },
    Intent {
        name: "insult",
        patterns: &[
            "you are stupid",
            "you are dumb",
            "you are useless",
            "you are bad",
            "you are annoying",
            "you are boring",
        ],
        responses: &[
            "That's not very nice.",
            "I'm still learning, please be patient with me.",
            "I'm sorry you feel that way.",
        ],
    },
];

pub struct CompiledIntent {
    pub intent: &'static Intent,
    pub patterns: Vec<Regex>,
}

/// Intents with their patterns compiled to word-boundary regexes.
pub static COMPILED_INTENTS: LazyLock<Vec<CompiledIntent>> = LazyLock::new(|| {
    INTENTS
        .iter()
        .map(|intent| CompiledIntent {
            intent,
            patterns: intent
                .patterns
                .iter()
                .filter_map(|p| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(p))).ok())
                .collect(),
        })
        .collect()
});

/// Single-word patterns and the intent they belong to, used for typo
/// tolerance.
pub static SINGLE_WORD_VOCAB: LazyLock<Vec<(&'static str, &'static Intent)>> =
    LazyLock::new(|| {
        INTENTS
            .iter()
            .flat_map(|intent| {
                intent
                    .patterns
                    .iter()
                    .filter(|p| !p.contains(' '))
                    .map(move |p| (*p, intent))
            })
            .collect()
    });

/// Finds the first intent whose compiled patterns match the raw message.
pub fn match_intent(message: &str) -> Option<&'static Intent> {
    COMPILED_INTENTS
        .iter()
        .find(|compiled| compiled.patterns.iter().any(|p| p.is_match(message)))
        .map(|compiled| compiled.intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_intent_word_boundary() {
        assert_eq!(match_intent("hi there friend").map(|i| i.name), Some("greet"));
        // "hi" inside a word must not match
        assert!(match_intent("shipment arrived").is_none());
    }

    #[test]
    fn test_match_intent_case_insensitive() {
        assert_eq!(match_intent("HELLO").map(|i| i.name), Some("greet"));
        assert_eq!(match_intent("Thank You!").map(|i| i.name), Some("thanks"));
    }

    #[test]
    fn test_match_intent_table_order_wins() {
        // "good night" appears in greet before goodbye's list is consulted.
        assert_eq!(match_intent("good night").map(|i| i.name), Some("greet"));
    }

    #[test]
    fn test_single_word_vocab_has_no_phrases() {
        assert!(SINGLE_WORD_VOCAB.iter().all(|(p, _)| !p.contains(' ')));
        assert!(SINGLE_WORD_VOCAB.iter().any(|(p, _)| *p == "hello"));
    }

    #[test]
    fn test_every_intent_has_responses() {
        for intent in INTENTS {
            assert!(!intent.responses.is_empty(), "{} has no responses", intent.name);
        }
    }
}
