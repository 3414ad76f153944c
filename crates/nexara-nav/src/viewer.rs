//! Collaborators outside the navigation core.
//!
//! The content viewer fetches and renders pages; the name prompt asks the
//! user what to call a bookmark. The core only issues commands to them and
//! never waits on them.

use crate::tab::TabId;

/// Embedded content viewer.
///
/// Commands are fire-and-forget. The home sentinel is never passed in; the
/// viewer reports titles back through
/// [`NavigationController::page_loaded`](crate::NavigationController::page_loaded).
pub trait ContentViewer {
    /// Show `url` in the viewport belonging to `tab`.
    fn load(&mut self, tab: TabId, url: &str);

    /// Re-fetch `url`, which is already showing in `tab`.
    fn reload(&mut self, tab: TabId, url: &str);

    /// Drop any state held for a closed tab.
    fn discard(&mut self, _tab: TabId) {}
}

/// Asks the user to confirm or edit a bookmark name.
///
/// Returns `None` when the user cancels.
pub trait NamePrompt {
    fn prompt_name(&mut self, suggested: &str) -> Option<String>;
}

impl<F> NamePrompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn prompt_name(&mut self, suggested: &str) -> Option<String> {
        self(suggested)
    }
}

/// Viewer that ignores every command.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullViewer;

impl ContentViewer for NullViewer {
    fn load(&mut self, _tab: TabId, _url: &str) {}

    fn reload(&mut self, _tab: TabId, _url: &str) {}
}
