//! Shared test utilities for the navigation core.
//!
//! Provides a [`RecordingViewer`] that records every viewer command for
//! assertion in controller tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::tab::TabId;
use crate::viewer::ContentViewer;

/// A recorded viewer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerCall {
    Load { tab: TabId, url: String },
    Reload { tab: TabId, url: String },
    Discard { tab: TabId },
}

/// A viewer that records all commands. Clones share one log, so a test
/// keeps a clone after handing the viewer to the controller.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewer {
    calls: Rc<RefCell<Vec<ViewerCall>>>,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ViewerCall> {
        self.calls.borrow().clone()
    }

    /// URLs passed to `load`, in order.
    pub fn loaded_urls(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ViewerCall::Load { url, .. } => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reload_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, ViewerCall::Reload { .. }))
            .count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl ContentViewer for RecordingViewer {
    fn load(&mut self, tab: TabId, url: &str) {
        self.calls.borrow_mut().push(ViewerCall::Load {
            tab,
            url: url.to_string(),
        });
    }

    fn reload(&mut self, tab: TabId, url: &str) {
        self.calls.borrow_mut().push(ViewerCall::Reload {
            tab,
            url: url.to_string(),
        });
    }

    fn discard(&mut self, tab: TabId) {
        self.calls.borrow_mut().push(ViewerCall::Discard { tab });
    }
}
