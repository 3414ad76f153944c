//! Nexara Web entry point.
//!
//! Runs the navigation core behind a line-driven terminal. Each input line
//! is one user intent (`open`, `back`, `tab new`, `bookmark add`, ...);
//! `help` lists them. Page rendering is stood in for by a logging viewer.
//!
//! The shell configuration is read from the file named by the first
//! argument or `NEXARA_CONFIG`, falling back to built-in defaults.

mod viewer;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use nexara_nav::NavigationController;
use nexara_terminal::{CommandOutput, CommandRegistry, Environment, register_browser_commands};
use nexara_types::config::ShellConfig;
use viewer::{LogViewer, StdinPrompt};

fn load_config() -> Result<ShellConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NEXARA_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => ShellConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ShellConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting Nexara Web ({} bookmarks, {} recent sites)",
        config.seed_bookmarks.len(),
        config.seed_recents.len(),
    );

    let mut nav = NavigationController::new(config, Box::new(LogViewer::default()));
    let mut prompt = StdinPrompt;

    let mut cmd_reg = CommandRegistry::new();
    register_browser_commands(&mut cmd_reg);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "nexara> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut env = Environment {
            nav: &mut nav,
            prompt: &mut prompt,
        };
        match cmd_reg.execute(&line, &mut env) {
            Ok(CommandOutput::Quit) => break,
            Ok(CommandOutput::None) => {},
            Ok(output) => writeln!(stdout, "{}", output.to_text())?,
            Err(e) => writeln!(stdout, "error: {e}")?,
        }
    }

    log::info!("Session ended with {} tab(s) open", nav.tabs().len());
    Ok(())
}
