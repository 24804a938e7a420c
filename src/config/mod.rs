//! Configuration file management.

mod manager;

pub use manager::{AvaConfig, ConfigFile, ConfigManager, ServerConfig};

/// Default endpoint the chat client talks to when nothing is configured.
///
/// Matches the default `ava serve` bind port.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

/// Default port for `ava serve`.
pub const DEFAULT_PORT: u16 = 3000;
