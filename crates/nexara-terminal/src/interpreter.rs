//! Command trait, registry, and dispatch logic.
//!
//! Supports quoted arguments, command history with `!!` / `!n` recall,
//! and case-insensitive command names.

use std::cell::RefCell;
use std::collections::BTreeMap;

use nexara_nav::{NamePrompt, NavigationController};
use nexara_types::error::{NexaraError, Result};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Tabular data (header row + data rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Command produced no visible output.
    None,
    /// Signal to the front-end to end the session.
    Quit,
}

impl CommandOutput {
    /// Render as plain text (tables as `|`-separated rows).
    pub fn to_text(&self) -> String {
        match self {
            CommandOutput::Text(t) => t.clone(),
            CommandOutput::Table { headers, rows } => {
                let mut out = headers.join(" | ");
                for row in rows {
                    out.push('\n');
                    out.push_str(&row.join(" | "));
                }
                out
            },
            CommandOutput::None | CommandOutput::Quit => String::new(),
        }
    }
}

/// Shared mutable environment passed to every command.
pub struct Environment<'a> {
    /// The browsing session.
    pub nav: &'a mut NavigationController,
    /// Asks the user for bookmark names.
    pub prompt: &'a mut dyn NamePrompt,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "open <url>").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Maximum number of history entries to retain.
const MAX_HISTORY: usize = 100;

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
    history: RefCell<Vec<String>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
            history: RefCell::new(Vec::new()),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_ascii_lowercase(), cmd);
    }

    /// Get command history.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    fn push_history(&self, line: &str) {
        let mut hist = self.history.borrow_mut();
        // Don't duplicate the last entry.
        if hist.last().is_none_or(|last| last != line) {
            hist.push(line.to_string());
            if hist.len() > MAX_HISTORY {
                hist.remove(0);
            }
        }
    }

    /// Parse and execute a command line.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(CommandOutput::None);
        }

        let line = self.expand_history(trimmed)?;
        self.push_history(&line);

        let tokens = tokenize(&line)?;
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(CommandOutput::None);
        };
        let name_lower = name.to_ascii_lowercase();
        let args: Vec<&str> = rest.iter().map(|s| s.as_str()).collect();

        match name_lower.as_str() {
            "help" => return self.execute_help(&args),
            "history" => return Ok(self.execute_history()),
            _ => {},
        }

        match self.commands.get(name_lower.as_str()) {
            Some(cmd) => {
                log::debug!("Dispatching `{name_lower}` with {} args", args.len());
                cmd.execute(&args, env)
            },
            None => Err(NexaraError::Command(format!("unknown command: {name}"))),
        }
    }

    /// Command names starting with `prefix`, sorted.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_ascii_lowercase();
        self.commands
            .keys()
            .filter(|name| name.starts_with(&prefix))
            .cloned()
            .collect()
    }

    fn expand_history(&self, input: &str) -> Result<String> {
        if input == "!!" {
            let hist = self.history.borrow();
            return hist
                .last()
                .cloned()
                .ok_or_else(|| NexaraError::Command("!!: no previous command".to_string()));
        }
        if let Some(n_str) = input.strip_prefix('!')
            && let Ok(n) = n_str.parse::<usize>()
        {
            let hist = self.history.borrow();
            if n == 0 || n > hist.len() {
                return Err(NexaraError::Command(format!("!{n}: event not found")));
            }
            return Ok(hist[n - 1].clone());
        }
        Ok(input.to_string())
    }

    fn execute_help(&self, args: &[&str]) -> Result<CommandOutput> {
        if let Some(topic) = args.first() {
            let cmd = self
                .commands
                .get(&topic.to_ascii_lowercase())
                .ok_or_else(|| NexaraError::Command(format!("help: no such command: {topic}")))?;
            return Ok(CommandOutput::Text(format!(
                "{} - {}\nusage: {}",
                cmd.name(),
                cmd.description(),
                cmd.usage()
            )));
        }
        let mut lines = vec!["Commands:".to_string()];
        for cmd in self.commands.values() {
            lines.push(format!("  {:<10} {}", cmd.name(), cmd.description()));
        }
        lines.push("  help       Show help for a command".to_string());
        lines.push("  history    Show command history".to_string());
        Ok(CommandOutput::Text(lines.join("\n")))
    }

    fn execute_history(&self) -> CommandOutput {
        let hist = self.history.borrow();
        let lines: Vec<String> = hist
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{:>4}  {line}", i + 1))
            .collect();
        CommandOutput::Text(lines.join("\n"))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a line into tokens, honouring single quotes, double quotes and
/// backslash escapes.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();
    let mut in_single = false;
    let mut in_double = false;
    // Distinguishes `''` (an empty argument) from no token at all.
    let mut quoted = false;

    while let Some(ch) = chars.next() {
        if in_single {
            if ch == '\'' {
                in_single = false;
            } else {
                current.push(ch);
            }
        } else if in_double {
            match ch {
                '"' => in_double = false,
                '\\' if matches!(chars.peek(), Some('"' | '\\')) => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                },
                _ => current.push(ch),
            }
        } else {
            match ch {
                '\'' => {
                    in_single = true;
                    quoted = true;
                },
                '"' => {
                    in_double = true;
                    quoted = true;
                },
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                },
                c if c.is_whitespace() => {
                    if !current.is_empty() || quoted {
                        tokens.push(std::mem::take(&mut current));
                        quoted = false;
                    }
                },
                _ => current.push(ch),
            }
        }
    }

    if in_single {
        return Err(NexaraError::Command("unterminated single quote".to_string()));
    }
    if in_double {
        return Err(NexaraError::Command("unterminated double quote".to_string()));
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }
    Ok(tokens)
}
