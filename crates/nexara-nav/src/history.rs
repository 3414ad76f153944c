//! Per-tab navigation history: an ordered URL log with a cursor.

/// Ordered list of visited URLs plus the position of the current page.
///
/// The stack is never empty and `cursor < entries.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryStack {
    /// Start a history at `url`.
    pub fn new(url: &str) -> Self {
        Self {
            entries: vec![url.to_string()],
            cursor: 0,
        }
    }

    /// Visit a new URL. Drops every entry after the cursor, appends `url`
    /// and moves the cursor onto it.
    ///
    /// Returns `false` (and leaves the stack untouched) for an empty URL.
    pub fn visit(&mut self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url.to_string());
        self.cursor = self.entries.len() - 1;
        true
    }

    /// Step back one entry. Returns the URL now current, or `None` at the
    /// oldest entry.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward one entry. Returns the URL now current, or `None` at
    /// the newest entry.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// URL at the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: a stack always holds the entry it started at.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
