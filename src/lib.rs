//! # ava - Assistant Chat CLI
//!
//! `ava` is a terminal client for a small chat assistant, plus the
//! assistant's backend. The client posts messages to an HTTP endpoint and
//! renders the conversation as an append-only transcript; the backend
//! answers small talk, word definitions, arithmetic, and to-do commands.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the backend
//! ava serve
//!
//! # One-shot question
//! ava "what is 2 + 2"
//!
//! # From stdin
//! echo "define umbrella" | ava
//!
//! # Interactive chat
//! ava chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/ava/config.toml`:
//!
//! ```toml
//! [ava]
//! endpoint = "http://127.0.0.1:3000"
//!
//! [server]
//! port = 3000
//! ```

/// Client for the `/api/chat` wire contract.
pub mod api;

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Message input from arguments and stdin.
pub mod input;

/// XDG-style path utilities for configuration and data.
pub mod paths;

/// The assistant brain: intents, dictionary, calculator, to-do.
pub mod responder;

/// The assistant backend server.
pub mod server;

/// The conversation transcript.
pub mod transcript;

/// Terminal UI components (spinner, colors).
pub mod ui;
