//! Error types for Nexara Web.
//!
//! Navigation itself never fails: rejected intents are no-ops. These errors
//! belong to the layers around the core (configuration, command parsing, I/O).

use std::io;

/// Errors produced by the Nexara Web shell.
#[derive(Debug, thiserror::Error)]
pub enum NexaraError {
    #[error("config error: {0}")]
    Config(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NexaraError>;
