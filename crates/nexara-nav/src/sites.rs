//! Bookmarks and the recent-sites log.

use std::collections::VecDeque;

use nexara_types::config::ShellConfig;
use nexara_types::is_home;
use serde::Serialize;

use crate::url::host_label;

/// A user-named bookmark. The URL is the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

/// An automatically recorded site, named after its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentSite {
    pub name: String,
    pub url: String,
}

/// Bookmark set plus a bounded most-recent-first log of visited sites.
#[derive(Debug, Clone)]
pub struct SiteListManager {
    bookmarks: Vec<Bookmark>,
    recents: VecDeque<RecentSite>,
    recent_limit: usize,
}

impl SiteListManager {
    pub fn new(recent_limit: usize) -> Self {
        Self {
            bookmarks: Vec::new(),
            recents: VecDeque::with_capacity(recent_limit),
            recent_limit,
        }
    }

    /// Build the lists seeded from configuration.
    ///
    /// Seeds pass through the same checks as user actions, so a seed on
    /// the home sentinel or a duplicate URL is dropped.
    pub fn from_config(config: &ShellConfig) -> Self {
        let mut sites = Self::new(config.recent_limit);
        for entry in &config.seed_bookmarks {
            sites.add_bookmark(&entry.name, &entry.url);
        }
        for entry in &config.seed_recents {
            if is_home(&entry.url) || sites.has_recent(&entry.url) {
                continue;
            }
            if sites.recents.len() == sites.recent_limit {
                break;
            }
            sites.recents.push_back(RecentSite {
                name: entry.name.clone(),
                url: entry.url.clone(),
            });
        }
        sites
    }

    /// Append a bookmark. Refused for the home sentinel, an already
    /// bookmarked URL, or a blank name.
    pub fn add_bookmark(&mut self, name: &str, url: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("Ignoring bookmark for {url}: empty name");
            return false;
        }
        if is_home(url) {
            log::debug!("Ignoring bookmark for the start page");
            return false;
        }
        if self.is_bookmarked(url) {
            log::debug!("Ignoring bookmark for {url}: already bookmarked");
            return false;
        }
        self.bookmarks.push(Bookmark {
            name: name.to_string(),
            url: url.to_string(),
        });
        log::info!("Bookmarked {url} as \"{name}\"");
        true
    }

    /// Remove the bookmark for `url`. Returns `false` if none existed.
    pub fn remove_bookmark(&mut self, url: &str) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|bm| bm.url != url);
        let removed = self.bookmarks.len() != before;
        if removed {
            log::info!("Removed bookmark {url}");
        }
        removed
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|bm| bm.url == url)
    }

    /// Record a visit in the recent-sites log.
    ///
    /// The home sentinel and URLs already in the log are ignored; a repeat
    /// visit does not move its entry. New entries go to the front and the
    /// oldest fall off the back once the limit is reached.
    pub fn record_visit(&mut self, url: &str) -> bool {
        if is_home(url) || self.has_recent(url) {
            return false;
        }
        self.recents.push_front(RecentSite {
            name: host_label(url).to_string(),
            url: url.to_string(),
        });
        self.recents.truncate(self.recent_limit);
        true
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Recent sites, most recent first.
    pub fn recents(&self) -> impl Iterator<Item = &RecentSite> {
        self.recents.iter()
    }

    pub fn recent_count(&self) -> usize {
        self.recents.len()
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    fn has_recent(&self, url: &str) -> bool {
        self.recents.iter().any(|r| r.url == url)
    }
}
