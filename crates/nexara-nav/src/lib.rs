//! Navigation core for the Nexara Web shell.
//!
//! Holds the tab registry (each tab with its own history stack), the
//! bookmark and recent-site lists, and the controller that applies user
//! intents to them. Rendering and fetching belong to an external
//! [`ContentViewer`]; the core only tells it what to show.

pub mod controller;
pub mod history;
pub mod sites;
pub mod snapshot;
pub mod tab;
pub mod url;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use controller::{BookmarkIndicator, NavigationController};
pub use history::HistoryStack;
pub use sites::{Bookmark, RecentSite, SiteListManager};
pub use snapshot::ChromeSnapshot;
pub use tab::{Tab, TabId, TabRegistry};
pub use viewer::{ContentViewer, NamePrompt, NullViewer};
