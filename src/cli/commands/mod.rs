//! Subcommand implementations.

/// One-shot ask command handler.
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Server command handler.
pub mod serve;
