//! Terminal stand-ins for the content viewer and the bookmark-name dialog.

use std::io::{self, BufRead, Write};

use nexara_nav::{ContentViewer, NamePrompt, TabId};

/// Content viewer that logs the commands it would carry out.
///
/// Page loads are reported back by hand with the `loaded` command.
#[derive(Debug, Default)]
pub struct LogViewer {
    loads: usize,
}

impl ContentViewer for LogViewer {
    fn load(&mut self, tab: TabId, url: &str) {
        self.loads += 1;
        log::info!("viewer: load {url} in tab {tab} (#{})", self.loads);
    }

    fn reload(&mut self, tab: TabId, url: &str) {
        log::info!("viewer: reload {url} in tab {tab}");
    }

    fn discard(&mut self, tab: TabId) {
        log::info!("viewer: discard tab {tab}");
    }
}

/// Reads a bookmark name from stdin. An empty answer keeps the
/// suggestion; end of input cancels.
pub struct StdinPrompt;

impl NamePrompt for StdinPrompt {
    fn prompt_name(&mut self, suggested: &str) -> Option<String> {
        print!("Bookmark name [{suggested}]: ");
        if let Err(e) = io::stdout().flush() {
            log::warn!("Could not flush prompt: {e}");
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim();
                Some(if answer.is_empty() { suggested } else { answer }.to_string())
            },
            Err(e) => {
                log::warn!("Could not read bookmark name: {e}");
                None
            },
        }
    }
}
