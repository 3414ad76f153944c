//! Navigation controller: turns user intents into tab, history and
//! site-list mutations.
//!
//! Every intent acts on the active tab. Intents that cannot apply (empty
//! input, stepping past either end of history, closing the last tab) are
//! no-ops reported through a `false` return and a debug log line, never
//! as errors.

use nexara_types::config::ShellConfig;
use nexara_types::{HOME_URL, is_home};
use serde::Serialize;

use crate::sites::SiteListManager;
use crate::tab::{Tab, TabId, TabRegistry};
use crate::url::normalize;
use crate::viewer::{ContentViewer, NamePrompt};

/// State of the bookmark star for the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookmarkIndicator {
    /// The start page cannot be bookmarked.
    Disabled,
    Bookmarked,
    NotBookmarked,
}

/// Owns the session's tabs and site lists and drives the content viewer.
pub struct NavigationController {
    tabs: TabRegistry,
    sites: SiteListManager,
    viewer: Box<dyn ContentViewer>,
    url_bar: String,
    config: ShellConfig,
}

impl NavigationController {
    /// Start a session with one tab on the start page and the site lists
    /// seeded from `config`.
    pub fn new(config: ShellConfig, viewer: Box<dyn ContentViewer>) -> Self {
        Self {
            tabs: TabRegistry::new(&config.home_title),
            sites: SiteListManager::from_config(&config),
            viewer,
            url_bar: HOME_URL.to_string(),
            config,
        }
    }

    // -- Navigation intents --

    /// Navigate the active tab to raw URL bar input.
    ///
    /// Input without a scheme is treated as `https://`. Recent sites record
    /// every real URL visited for the first time.
    pub fn navigate(&mut self, raw: &str) -> bool {
        let Some(url) = normalize(raw) else {
            log::debug!("Ignoring navigation to empty input");
            return false;
        };

        let title = self.title_for(&url);
        let tab = self.tabs.current_tab_mut();
        tab.history_mut().visit(&url);
        tab.set_title(title);
        let id = tab.id();
        log::info!("Tab {id}: navigated to {url}");

        self.url_bar = url.clone();
        self.show(id, &url);
        self.sites.record_visit(&url);
        true
    }

    pub fn go_back(&mut self) -> bool {
        let tab = self.tabs.current_tab_mut();
        let Some(url) = tab.history_mut().back().map(str::to_string) else {
            log::debug!("Tab {}: already at oldest history entry", tab.id());
            return false;
        };
        self.arrive(url);
        true
    }

    pub fn go_forward(&mut self) -> bool {
        let tab = self.tabs.current_tab_mut();
        let Some(url) = tab.history_mut().forward().map(str::to_string) else {
            log::debug!("Tab {}: already at newest history entry", tab.id());
            return false;
        };
        self.arrive(url);
        true
    }

    /// Ask the viewer to re-fetch the active page. History is untouched.
    pub fn reload(&mut self) -> bool {
        let tab = self.tabs.current_tab();
        if is_home(tab.url()) {
            log::debug!("Tab {}: nothing to reload on the start page", tab.id());
            return false;
        }
        self.viewer.reload(tab.id(), tab.url());
        true
    }

    pub fn go_home(&mut self) -> bool {
        self.navigate(HOME_URL)
    }

    // -- Tab intents --

    /// Open a tab on the start page and switch to it.
    pub fn new_tab(&mut self) -> TabId {
        let id = self.tabs.create_tab();
        self.url_bar = HOME_URL.to_string();
        id
    }

    /// Close a tab. The last remaining tab cannot be closed.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let was_active = self.tabs.active_id() == id;
        if !self.tabs.close_tab(id) {
            return false;
        }
        self.viewer.discard(id);
        if was_active {
            self.sync_active();
        }
        true
    }

    /// Bring an existing tab to the front.
    pub fn switch_tab(&mut self, id: TabId) -> bool {
        if self.tabs.active_id() == id {
            self.url_bar = self.tabs.current_tab().url().to_string();
            return true;
        }
        if !self.tabs.activate(id) {
            return false;
        }
        self.sync_active();
        true
    }

    // -- Bookmarks --

    /// Bookmark the active page under a name confirmed through `prompt`.
    ///
    /// The prompt is only consulted when the page can be bookmarked; it is
    /// offered the page title as a suggestion. Cancelling is a no-op.
    pub fn bookmark_current(&mut self, prompt: &mut dyn NamePrompt) -> bool {
        let tab = self.tabs.current_tab();
        let url = tab.url().to_string();
        if is_home(&url) || self.sites.is_bookmarked(&url) {
            log::debug!("Tab {}: page cannot be bookmarked", tab.id());
            return false;
        }
        let suggested = tab.display_title(&self.config.default_title).to_string();
        match prompt.prompt_name(&suggested) {
            Some(name) => self.sites.add_bookmark(&name, &url),
            None => {
                log::debug!("Bookmark of {url} cancelled");
                false
            },
        }
    }

    pub fn remove_bookmark(&mut self, url: &str) -> bool {
        self.sites.remove_bookmark(url)
    }

    pub fn bookmark_indicator(&self) -> BookmarkIndicator {
        let url = self.tabs.current_tab().url();
        if is_home(url) {
            BookmarkIndicator::Disabled
        } else if self.sites.is_bookmarked(url) {
            BookmarkIndicator::Bookmarked
        } else {
            BookmarkIndicator::NotBookmarked
        }
    }

    // -- Viewer reports --

    /// Apply a title reported by the viewer for `url` in `tab`.
    ///
    /// Reports for closed tabs, or for a URL the tab has since left, are
    /// dropped.
    pub fn page_loaded(&mut self, tab: TabId, url: &str, title: &str) -> bool {
        let Some(t) = self.tabs.get_mut(tab) else {
            log::warn!("Dropping load report for closed tab {tab}");
            return false;
        };
        if t.url() != url {
            log::warn!("Dropping stale load report for tab {tab}: {url}");
            return false;
        }
        let title = title.trim();
        t.set_title((!title.is_empty()).then(|| title.to_string()));
        true
    }

    // -- URL bar --

    /// Replace the URL bar text (typing).
    pub fn set_url_bar(&mut self, text: &str) {
        self.url_bar = text.to_string();
    }

    /// Navigate to whatever the URL bar holds (Enter).
    pub fn submit_url_bar(&mut self) -> bool {
        let input = self.url_bar.clone();
        self.navigate(&input)
    }

    pub fn url_bar(&self) -> &str {
        &self.url_bar
    }

    /// URL bar text as shown: blank while it holds the home sentinel.
    pub fn url_bar_display(&self) -> &str {
        if is_home(&self.url_bar) {
            ""
        } else {
            &self.url_bar
        }
    }

    // -- Queries --

    pub fn can_go_back(&self) -> bool {
        self.tabs.current_tab().history().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.tabs.current_tab().history().can_go_forward()
    }

    pub fn current_tab(&self) -> &Tab {
        self.tabs.current_tab()
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    pub fn sites(&self) -> &SiteListManager {
        &self.sites
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Tab strip label for `tab`.
    pub fn display_title<'a>(&'a self, tab: &'a Tab) -> &'a str {
        tab.display_title(&self.config.default_title)
    }

    // -- Internals --

    fn title_for(&self, url: &str) -> Option<String> {
        is_home(url).then(|| self.config.home_title.clone())
    }

    /// Finish a back/forward step onto `url`.
    fn arrive(&mut self, url: String) {
        let title = self.title_for(&url);
        let tab = self.tabs.current_tab_mut();
        tab.set_title(title);
        let id = tab.id();
        log::info!("Tab {id}: moved to {url}");
        self.url_bar = url.clone();
        self.show(id, &url);
    }

    /// Point the URL bar and viewer at the newly active tab.
    fn sync_active(&mut self) {
        let tab = self.tabs.current_tab();
        let (id, url) = (tab.id(), tab.url().to_string());
        log::info!("Tab {id} is now active");
        self.url_bar = url.clone();
        self.show(id, &url);
    }

    fn show(&mut self, tab: TabId, url: &str) {
        if !is_home(url) {
            self.viewer.load(tab, url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RecordingViewer, ViewerCall};

    fn controller() -> (NavigationController, RecordingViewer) {
        let viewer = RecordingViewer::new();
        let config = ShellConfig {
            seed_bookmarks: Vec::new(),
            seed_recents: Vec::new(),
            ..ShellConfig::default()
        };
        let nav = NavigationController::new(config, Box::new(viewer.clone()));
        (nav, viewer)
    }

    fn recent_urls(nav: &NavigationController) -> Vec<String> {
        nav.sites().recents().map(|r| r.url.clone()).collect()
    }

    #[test]
    fn fresh_session_navigate_bare_host() {
        let (mut nav, viewer) = controller();
        assert!(nav.navigate("example.com"));

        assert_eq!(nav.current_tab().url(), "https://example.com");
        let recents: Vec<_> = nav.sites().recents().cloned().collect();
        assert_eq!(recents.len(), 1);
        assert_eq!(recents[0].name, "example.com");
        assert_eq!(recents[0].url, "https://example.com");
        assert_eq!(viewer.loaded_urls(), ["https://example.com"]);
    }

    #[test]
    fn empty_navigation_is_noop() {
        let (mut nav, viewer) = controller();
        assert!(!nav.navigate(""));
        assert!(!nav.navigate("   "));
        assert_eq!(nav.current_tab().url(), HOME_URL);
        assert_eq!(nav.current_tab().history().len(), 1);
        assert!(viewer.calls().is_empty());
    }

    #[test]
    fn navigate_keeps_existing_scheme() {
        let (mut nav, _) = controller();
        nav.navigate("http://plain.example/path");
        assert_eq!(nav.current_tab().url(), "http://plain.example/path");
        assert_eq!(nav.sites().recents().next().unwrap().name, "plain.example");
    }

    #[test]
    fn home_is_not_recorded_or_loaded() {
        let (mut nav, viewer) = controller();
        nav.navigate("a.com");
        assert!(nav.go_home());
        assert_eq!(nav.current_tab().url(), HOME_URL);
        assert_eq!(nav.current_tab().history().len(), 3);
        assert_eq!(recent_urls(&nav), ["https://a.com"]);
        assert_eq!(viewer.loaded_urls(), ["https://a.com"]);
    }

    #[test]
    fn back_and_forward_move_the_tab_url() {
        let (mut nav, viewer) = controller();
        nav.navigate("a.com");
        nav.navigate("b.com");
        viewer.clear();

        assert!(nav.go_back());
        assert_eq!(nav.current_tab().url(), "https://a.com");
        assert_eq!(nav.url_bar(), "https://a.com");
        assert!(nav.go_forward());
        assert_eq!(nav.current_tab().url(), "https://b.com");
        assert_eq!(viewer.loaded_urls(), ["https://a.com", "https://b.com"]);
    }

    #[test]
    fn back_at_start_and_forward_at_end_are_noops() {
        let (mut nav, viewer) = controller();
        assert!(!nav.go_back());
        nav.navigate("a.com");
        assert!(!nav.go_forward());
        assert_eq!(nav.current_tab().url(), "https://a.com");
        assert_eq!(viewer.loaded_urls(), ["https://a.com"]);
    }

    #[test]
    fn back_to_home_does_not_load_viewer() {
        let (mut nav, viewer) = controller();
        nav.navigate("a.com");
        viewer.clear();
        assert!(nav.go_back());
        assert_eq!(nav.current_tab().url(), HOME_URL);
        assert_eq!(nav.current_tab().title(), Some("Home"));
        assert!(viewer.calls().is_empty());
    }

    #[test]
    fn navigate_after_back_discards_forward_history() {
        let (mut nav, _) = controller();
        nav.navigate("a.com");
        nav.navigate("b.com");
        nav.navigate("c.com");
        nav.go_back();
        nav.navigate("d.com");

        let entries = nav.current_tab().history().entries();
        assert_eq!(entries, [HOME_URL, "https://a.com", "https://b.com", "https://d.com"]);
        assert!(!nav.can_go_forward());
        assert!(!nav.go_forward());
    }

    #[test]
    fn revisit_does_not_promote_recent() {
        let (mut nav, _) = controller();
        nav.navigate("a.com");
        nav.navigate("b.com");
        nav.navigate("a.com");
        assert_eq!(recent_urls(&nav), ["https://b.com", "https://a.com"]);
    }

    #[test]
    fn reload_only_for_real_pages() {
        let (mut nav, viewer) = controller();
        assert!(!nav.reload());
        assert_eq!(viewer.reload_count(), 0);

        nav.navigate("a.com");
        assert!(nav.reload());
        assert_eq!(viewer.reload_count(), 1);
        assert_eq!(nav.current_tab().history().len(), 2);
        assert_eq!(
            viewer.calls().last(),
            Some(&ViewerCall::Reload {
                tab: TabId::new(1),
                url: "https://a.com".into()
            })
        );
    }

    #[test]
    fn tabs_navigate_independently() {
        let (mut nav, _) = controller();
        nav.navigate("a.com");
        let second = nav.new_tab();
        assert_eq!(nav.url_bar(), HOME_URL);
        nav.navigate("b.com");

        assert_eq!(nav.tabs().get(TabId::new(1)).unwrap().url(), "https://a.com");
        assert_eq!(nav.tabs().get(second).unwrap().url(), "https://b.com");
        assert!(nav.go_back());
        assert_eq!(nav.current_tab().url(), HOME_URL);
        assert_eq!(nav.tabs().get(TabId::new(1)).unwrap().url(), "https://a.com");
    }

    #[test]
    fn closing_active_tab_falls_back_to_first_tab() {
        let (mut nav, viewer) = controller();
        nav.navigate("a.com");
        nav.new_tab();
        let third = nav.new_tab();
        viewer.clear();

        assert!(nav.close_tab(third));
        assert_eq!(nav.tabs().active_id(), TabId::new(1));
        assert_eq!(nav.url_bar(), "https://a.com");
        assert_eq!(
            viewer.calls(),
            [
                ViewerCall::Discard { tab: third },
                ViewerCall::Load {
                    tab: TabId::new(1),
                    url: "https://a.com".into()
                },
            ]
        );
    }

    #[test]
    fn create_twice_then_close_active() {
        let (mut nav, _) = controller();
        let first = nav.tabs().active_id();
        nav.new_tab();
        let last = nav.new_tab();
        assert!(nav.close_tab(last));
        assert_eq!(nav.tabs().active_id(), first);
        assert_eq!(nav.tabs().len(), 2);
    }

    #[test]
    fn closing_last_tab_is_noop() {
        let (mut nav, viewer) = controller();
        assert!(!nav.close_tab(TabId::new(1)));
        assert_eq!(nav.tabs().len(), 1);
        assert!(viewer.calls().is_empty());
    }

    #[test]
    fn switch_tab_updates_url_bar_and_viewer() {
        let (mut nav, viewer) = controller();
        nav.navigate("a.com");
        let second = nav.new_tab();
        viewer.clear();

        assert!(nav.switch_tab(TabId::new(1)));
        assert_eq!(nav.url_bar(), "https://a.com");
        assert!(nav.switch_tab(second));
        assert_eq!(nav.url_bar(), HOME_URL);
        assert_eq!(viewer.loaded_urls(), ["https://a.com"]);
        assert!(!nav.switch_tab(TabId::new(99)));
        assert_eq!(nav.tabs().active_id(), second);
    }

    #[test]
    fn switch_to_active_tab_resets_url_bar_only() {
        let (mut nav, viewer) = controller();
        nav.navigate("a.com");
        nav.set_url_bar("half-typed");
        viewer.clear();
        assert!(nav.switch_tab(TabId::new(1)));
        assert_eq!(nav.url_bar(), "https://a.com");
        assert!(viewer.calls().is_empty());
    }

    #[test]
    fn url_bar_submit_navigates() {
        let (mut nav, _) = controller();
        assert_eq!(nav.url_bar_display(), "");
        nav.set_url_bar("rust-lang.org");
        assert!(nav.submit_url_bar());
        assert_eq!(nav.url_bar(), "https://rust-lang.org");
        assert_eq!(nav.url_bar_display(), "https://rust-lang.org");
    }

    #[test]
    fn bookmark_current_uses_prompt_suggestion() {
        let (mut nav, _) = controller();
        nav.navigate("a.com");
        nav.page_loaded(TabId::new(1), "https://a.com", "Site A");

        let mut seen = None;
        let mut prompt = |suggested: &str| {
            seen = Some(suggested.to_string());
            Some("My A".to_string())
        };
        assert!(nav.bookmark_current(&mut prompt));
        assert_eq!(seen.as_deref(), Some("Site A"));
        assert_eq!(nav.sites().bookmarks()[0].name, "My A");
        assert_eq!(nav.bookmark_indicator(), BookmarkIndicator::Bookmarked);
    }

    #[test]
    fn bookmark_suggestion_defaults_to_new_tab() {
        let (mut nav, _) = controller();
        nav.navigate("a.com");
        let mut seen = String::new();
        let mut prompt = |suggested: &str| {
            seen = suggested.to_string();
            None
        };
        assert!(!nav.bookmark_current(&mut prompt));
        assert_eq!(seen, "New Tab");
        assert!(nav.sites().bookmarks().is_empty());
    }

    #[test]
    fn bookmark_current_skips_prompt_when_not_allowed() {
        let (mut nav, _) = controller();
        let mut asked = 0;
        let mut prompt = |_: &str| {
            asked += 1;
            Some("x".to_string())
        };
        assert!(!nav.bookmark_current(&mut prompt));
        nav.navigate("a.com");
        assert!(nav.bookmark_current(&mut prompt));
        assert!(!nav.bookmark_current(&mut prompt));
        assert_eq!(asked, 1);
        assert_eq!(nav.sites().bookmarks().len(), 1);
    }

    #[test]
    fn empty_prompt_answer_is_noop() {
        let (mut nav, _) = controller();
        nav.navigate("a.com");
        let mut prompt = |_: &str| Some(String::new());
        assert!(!nav.bookmark_current(&mut prompt));
        assert_eq!(nav.bookmark_indicator(), BookmarkIndicator::NotBookmarked);
    }

    #[test]
    fn indicator_disabled_on_home() {
        let (mut nav, _) = controller();
        assert_eq!(nav.bookmark_indicator(), BookmarkIndicator::Disabled);
        nav.navigate("a.com");
        assert_eq!(nav.bookmark_indicator(), BookmarkIndicator::NotBookmarked);
        let mut prompt = |_: &str| Some("A".to_string());
        nav.bookmark_current(&mut prompt);
        assert!(nav.remove_bookmark("https://a.com"));
        assert_eq!(nav.bookmark_indicator(), BookmarkIndicator::NotBookmarked);
    }

    #[test]
    fn page_loaded_sets_title() {
        let (mut nav, _) = controller();
        nav.navigate("a.com");
        assert_eq!(nav.display_title(nav.current_tab()), "New Tab");
        assert!(nav.page_loaded(TabId::new(1), "https://a.com", "Example A"));
        assert_eq!(nav.display_title(nav.current_tab()), "Example A");
    }

    #[test]
    fn stale_or_unknown_reports_dropped() {
        let (mut nav, _) = controller();
        nav.navigate("a.com");
        nav.navigate("b.com");
        assert!(!nav.page_loaded(TabId::new(1), "https://a.com", "Old"));
        assert!(!nav.page_loaded(TabId::new(5), "https://b.com", "Ghost"));
        assert_eq!(nav.current_tab().title(), None);
    }

    #[test]
    fn navigating_clears_previous_title() {
        let (mut nav, _) = controller();
        nav.navigate("a.com");
        nav.page_loaded(TabId::new(1), "https://a.com", "A");
        nav.navigate("b.com");
        assert_eq!(nav.current_tab().title(), None);
        nav.go_back();
        assert_eq!(nav.current_tab().title(), None);
    }

    #[test]
    fn recents_capped_through_navigation() {
        let (mut nav, _) = controller();
        for i in 0..12 {
            nav.navigate(&format!("site{i}.com"));
        }
        let urls = recent_urls(&nav);
        assert_eq!(urls.len(), 8);
        assert_eq!(urls[0], "https://site11.com");
        assert_eq!(urls[7], "https://site4.com");
    }

    #[test]
    fn seeded_config_lists_present() {
        let nav = NavigationController::new(
            ShellConfig::default(),
            Box::new(crate::viewer::NullViewer),
        );
        assert_eq!(nav.sites().bookmarks().len(), 4);
        assert_eq!(nav.sites().recent_count(), 2);
    }
}
