//! Read-only view of the chrome state for presentation layers.
//!
//! The presentation layer calls [`NavigationController::snapshot`] after
//! each intent and redraws from the result.

use nexara_types::is_home;
use serde::Serialize;

use crate::controller::{BookmarkIndicator, NavigationController};
use crate::sites::{Bookmark, RecentSite};
use crate::tab::TabId;

/// One entry in the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSummary {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub active: bool,
}

/// A popular-site tile on the start page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub name: String,
    pub url: String,
}

/// Links listed on the start page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartPage {
    pub bookmarks: Vec<Bookmark>,
    pub recents: Vec<RecentSite>,
    pub popular: Vec<QuickLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromeSnapshot {
    pub tabs: Vec<TabSummary>,
    /// Whether the tab strip offers a close button.
    pub closable: bool,
    pub url_bar: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub bookmark: BookmarkIndicator,
    pub bookmarks: Vec<Bookmark>,
    pub recents: Vec<RecentSite>,
    /// Present only while the active tab shows the start page.
    pub start_page: Option<StartPage>,
}

/// Tile URL for a popular site name.
pub fn popular_site_url(name: &str) -> String {
    format!("https://www.{}.com", name.to_lowercase())
}

impl NavigationController {
    pub fn snapshot(&self) -> ChromeSnapshot {
        let active = self.tabs().active_id();
        let tabs = self
            .tabs()
            .tabs()
            .iter()
            .map(|tab| TabSummary {
                id: tab.id(),
                title: self.display_title(tab).to_string(),
                url: tab.url().to_string(),
                active: tab.id() == active,
            })
            .collect();

        let start_page = is_home(self.current_tab().url()).then(|| self.start_page());

        ChromeSnapshot {
            tabs,
            closable: self.tabs().len() > 1,
            url_bar: self.url_bar_display().to_string(),
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            bookmark: self.bookmark_indicator(),
            bookmarks: self.sites().bookmarks().to_vec(),
            recents: self.sites().recents().cloned().collect(),
            start_page,
        }
    }

    fn start_page(&self) -> StartPage {
        let count = self.config().quick_link_count;
        StartPage {
            bookmarks: self.sites().bookmarks().iter().take(count).cloned().collect(),
            recents: self.sites().recents().take(count).cloned().collect(),
            popular: self
                .config()
                .popular_sites
                .iter()
                .map(|name| QuickLink {
                    name: name.clone(),
                    url: popular_site_url(name),
                })
                .collect(),
        }
    }
}
