//! Command interpreter for the Nexara Web shell.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The interpreter tokenizes
//! input lines, resolves the command name, and dispatches `execute()`
//! against the browsing session held in the `Environment`.

mod browser_commands;
mod interpreter;

/// Register the navigation, tab and bookmark commands into a registry.
pub use browser_commands::register_browser_commands;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, table, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Shared mutable environment passed to every command.
pub use interpreter::Environment;
/// Quote-aware line tokenizer.
pub use interpreter::tokenize;
