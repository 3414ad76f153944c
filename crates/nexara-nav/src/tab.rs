//! Tabs and the registry that owns them.

use std::fmt;

use nexara_types::HOME_URL;
use serde::Serialize;

use crate::history::HistoryStack;

/// Session-unique tab identity. Issued in increasing order, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TabId(u64);

impl TabId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A browser tab: identity, title and its own history.
///
/// The tab's URL is always the URL at its history cursor.
#[derive(Debug, Clone)]
pub struct Tab {
    id: TabId,
    title: Option<String>,
    history: HistoryStack,
}

impl Tab {
    fn new(id: TabId, title: &str) -> Self {
        Self {
            id,
            title: Some(title.to_string()),
            history: HistoryStack::new(HOME_URL),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn url(&self) -> &str {
        self.history.current()
    }

    /// Title reported for the current page, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title to show in the tab strip, falling back to `default` when the
    /// page has not reported one.
    pub fn display_title<'a>(&'a self, default: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => default,
        }
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStack {
        &mut self.history
    }
}

/// Ordered collection of open tabs with exactly one active tab.
///
/// The registry is created holding one tab and can never drop below one,
/// so the active tab always exists.
#[derive(Debug, Clone)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    /// Index into `tabs`.
    active: usize,
    next_id: u64,
    home_title: String,
}

impl TabRegistry {
    /// Create a registry holding a single tab on the start page.
    pub fn new(home_title: &str) -> Self {
        let mut reg = Self {
            tabs: Vec::new(),
            active: 0,
            next_id: 1,
            home_title: home_title.to_string(),
        };
        reg.create_tab();
        reg
    }

    /// Open a tab on the start page and make it active.
    pub fn create_tab(&mut self) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        self.tabs.push(Tab::new(id, &self.home_title));
        self.active = self.tabs.len() - 1;
        log::info!("Opened tab {id} ({} open)", self.tabs.len());
        id
    }

    /// Close a tab. Refused for the last remaining tab and for unknown ids.
    ///
    /// Closing the active tab activates the first tab in registry order.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        if self.tabs.len() == 1 {
            log::debug!("Refusing to close tab {id}: last remaining tab");
            return false;
        }
        let Some(pos) = self.position(id) else {
            log::debug!("Refusing to close tab {id}: no such tab");
            return false;
        };
        self.tabs.remove(pos);
        if pos == self.active {
            self.active = 0;
        } else if pos < self.active {
            self.active -= 1;
        }
        log::info!(
            "Closed tab {id}, active tab is {} ({} open)",
            self.active_id(),
            self.tabs.len()
        );
        true
    }

    /// Make `id` the active tab. Returns `false` for unknown ids.
    pub fn activate(&mut self, id: TabId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.active = pos;
                true
            },
            None => {
                log::debug!("Cannot activate tab {id}: no such tab");
                false
            },
        }
    }

    pub fn current_tab(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn current_tab_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active]
    }

    pub fn active_id(&self) -> TabId {
        self.tabs[self.active].id
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// Open tabs in registry (creation) order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Never true: the registry always holds at least one tab.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }
}
