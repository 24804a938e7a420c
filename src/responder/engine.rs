//! The assistant's reply pipeline.
//!
//! Stages run in a fixed order: intents, dictionary queries, calculator
//! queries, to-do commands, typo tolerance, and finally a friendly
//! fallback. The first stage that claims the message produces the reply.

use anyhow::Result;
use rand::prelude::*;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;
use tokio::sync::Mutex;

use super::calculator::{self, format_value};
use super::dictionary::Dictionary;
use super::fuzzy;
use super::intents::{self, INTENTS, Intent, SINGLE_WORD_VOCAB};
use super::todo::TaskStore;

/// Reply for empty or punctuation-only input.
pub const EMPTY_MESSAGE_REPLY: &str = "Please say something so I can help.";

const FALLBACK_REPLIES: &[&str] = &[
    "Sorry, I didn't get that. Could you rephrase?",
    "Hmm, I'm not sure I understood you.",
    "I didn't quite catch that, can you try again?",
    "I'm still learning! Can you say it differently?",
    "Could you clarify what you mean?",
];

const SINGLE_WORD_CUTOFF: f64 = 0.80;
const WHOLE_MESSAGE_CUTOFF: f64 = 0.75;

// unwraps below are safe: the regex literals are compile-time constants
#[allow(clippy::unwrap_used)]
static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s]+").unwrap());

static DICTIONARY_QUERIES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)meaning of (.+)",
        r"(?i)what does (.+) mean",
        r"(?i)define (.+)",
        r"(?i)definition of (.+)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static CALCULATOR_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\s*what\s+is\s+(.+)$",
        r"^\s*calculate\s+(.+)$",
        r"^\s*solve\s+(.+)$",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

#[allow(clippy::unwrap_used)]
static EXPRESSION_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-*/%.()\s]+$").unwrap());

#[allow(clippy::unwrap_used)]
static HAS_OPERATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[+\-*/%]").unwrap());

#[derive(Debug, PartialEq, Eq)]
enum TodoCommand {
    Add(String),
    Show,
    Remove(u64),
    Done(u64),
}

/// The assistant brain behind `/api/chat`.
pub struct Responder {
    dictionary: Dictionary,
    tasks: Mutex<TaskStore>,
}

impl Responder {
    /// Creates a responder whose task list lives at `tasks_path`.
    pub fn new(tasks_path: PathBuf) -> Self {
        Self {
            dictionary: Dictionary::new(),
            tasks: Mutex::new(TaskStore::open(tasks_path)),
        }
    }

    /// Produces the reply for one user message.
    pub async fn respond(&self, message: &str) -> Result<String> {
        if message.trim().is_empty() {
            return Ok(EMPTY_MESSAGE_REPLY.to_string());
        }

        let raw_lower = message.to_lowercase();
        let normalized = normalize(message);
        if normalized.is_empty() {
            // Only punctuation or symbols survived.
            return Ok(EMPTY_MESSAGE_REPLY.to_string());
        }

        if let Some(intent) = intents::match_intent(message) {
            return Ok(pick_response(intent).to_string());
        }

        if let Some(word) = dictionary_query(&normalized) {
            let reply = match self.dictionary.lookup(&word).await {
                Some(definition) => definition,
                None => format!("Sorry, I couldn't find the meaning of '{word}'."),
            };
            return Ok(reply);
        }

        if let Some(expr) = calculator_query(&raw_lower) {
            let result = calculator::evaluate(&expr)
                .map_or_else(|e| e.to_string(), format_value);
            return Ok(format!("The result is: {result}"));
        }

        if let Some(command) = todo_query(message) {
            return self.run_todo_command(command).await;
        }

        if let Some(reply) = fuzzy_reply(&normalized) {
            return Ok(reply);
        }

        Ok(pick(FALLBACK_REPLIES).to_string())
    }

    async fn run_todo_command(&self, command: TodoCommand) -> Result<String> {
        let mut tasks = self.tasks.lock().await;
        match command {
            TodoCommand::Add(title) => tasks.add(&title),
            TodoCommand::Show => Ok(tasks.format_list()),
            TodoCommand::Remove(id) => tasks.remove(id),
            TodoCommand::Done(id) => tasks.mark_done(id),
        }
    }
}

/// Lowercases and strips everything but letters, digits, and whitespace.
fn normalize(message: &str) -> String {
    NON_ALNUM
        .replace_all(&message.to_lowercase(), "")
        .trim()
        .to_string()
}

/// Extracts the target word of a definition request, if any.
fn dictionary_query(message: &str) -> Option<String> {
    DICTIONARY_QUERIES.iter().find_map(|pattern| {
        pattern
            .captures(message)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Extracts an arithmetic expression, if the message looks like one.
///
/// Detection runs on the lowercased raw message so operators survive.
fn calculator_query(raw_lower: &str) -> Option<String> {
    for pattern in CALCULATOR_PHRASES.iter() {
        if let Some(captures) = pattern.captures(raw_lower) {
            let expr: String = captures
                .get(1)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .chars()
                .filter(|c| c.is_ascii_digit() || "+-*/%.() ".contains(*c))
                .collect();
            let expr = expr.trim().to_string();
            // A plain number ("what is 22") is not an expression.
            if HAS_OPERATOR.is_match(&expr) {
                return Some(expr);
            }
        }
    }

    if EXPRESSION_ONLY.is_match(raw_lower) && HAS_OPERATOR.is_match(raw_lower) {
        return Some(raw_lower.trim().to_string());
    }

    None
}

/// Parses a to-do command, if the message is one.
///
/// Ids must be numeric; a non-numeric argument is not a to-do command and
/// the message falls through to the later pipeline stages.
fn todo_query(message: &str) -> Option<TodoCommand> {
    let message = message.trim().to_lowercase();

    if let Some(title) = message.strip_prefix("add task ") {
        return Some(TodoCommand::Add(title.trim().to_string()));
    }
    // "show task"-prefixed messages all count ("show tasks please").
    if message.starts_with("show task") {
        return Some(TodoCommand::Show);
    }
    if let Some(arg) = message.strip_prefix("remove task ") {
        if let Ok(id) = arg.trim().parse() {
            return Some(TodoCommand::Remove(id));
        }
    }
    if let Some(arg) = message.strip_prefix("mark done ") {
        if let Ok(id) = arg.trim().parse() {
            return Some(TodoCommand::Done(id));
        }
    }

    None
}

/// Typo tolerance: single tokens first, then the whole message.
fn fuzzy_reply(normalized: &str) -> Option<String> {
    for token in normalized.split_whitespace() {
        let vocab = SINGLE_WORD_VOCAB.iter().map(|(p, _)| *p);
        if let Some(matched) = fuzzy::close_match(token, vocab, SINGLE_WORD_CUTOFF) {
            let intent = SINGLE_WORD_VOCAB
                .iter()
                .find(|(p, _)| *p == matched)
                .map(|(_, intent)| *intent)?;
            return Some(did_you_mean(matched, intent));
        }
    }

    let all_patterns = INTENTS.iter().flat_map(|i| i.patterns.iter().copied());
    let matched = fuzzy::close_match(normalized, all_patterns, WHOLE_MESSAGE_CUTOFF)?;
    let intent = INTENTS
        .iter()
        .find(|i| i.patterns.contains(&matched))?;
    Some(did_you_mean(matched, intent))
}

fn did_you_mean(pattern: &str, intent: &Intent) -> String {
    format!("(Did you mean \"{pattern}\"?)\n{}", pick_response(intent))
}

fn pick_response(intent: &Intent) -> &'static str {
    pick(intent.responses)
}

fn pick(pool: &[&'static str]) -> &'static str {
    let mut rng = rand::rng();
    pool.choose(&mut rng).copied().unwrap_or_default()
}
