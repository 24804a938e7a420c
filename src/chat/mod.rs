//! Interactive chat mode.
//!
//! Provides a REPL-style session with slash commands; each submitted line
//! becomes one request/response round trip rendered into the transcript.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, EMPTY_INPUT_PROMPT, SessionConfig};
