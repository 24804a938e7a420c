//! The assistant brain: intent matching, feature detection, and reply
//! generation for the server side of `/api/chat`.

/// Arithmetic expression evaluation.
pub mod calculator;

/// Word definitions via the Free Dictionary API.
pub mod dictionary;

mod engine;
mod fuzzy;
mod intents;

/// JSON-file backed to-do list.
pub mod todo;

pub use engine::{EMPTY_MESSAGE_REPLY, Responder};
