//! Scroll position memory for list pages
//!
//! List routes record their path on enter. The entry route saves the scroll
//! offset of that list on enter and arms the restore flag on leave, so going
//! back lands where the user was.

use std::cell::{Cell, RefCell};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ViewStateTracker {
    current_pathname: RefCell<Option<String>>,
    /// Offset and the list path it was captured on
    saved: RefCell<Option<(String, f64)>>,
    restore: Cell<bool>,
}

impl ViewStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_pathname(&self, path: &str) {
        *self.current_pathname.borrow_mut() = Some(path.to_string());
    }

    pub fn current_pathname(&self) -> Option<String> {
        self.current_pathname.borrow().clone()
    }

    /// Save `offset` for the last list path. Ignored if no list was visited yet.
    pub fn set_scroll_position(&self, offset: f64) {
        let Some(path) = self.current_pathname() else {
            return;
        };
        debug!(%path, offset, "Saving scroll position");
        *self.saved.borrow_mut() = Some((path, offset));
    }

    pub fn set_restore(&self, restore: bool) {
        self.restore.set(restore);
    }

    /// Whether `path` should jump back to its saved offset.
    pub fn should_restore(&self, path: &str) -> bool {
        self.restore.get()
            && self
                .saved
                .borrow()
                .as_ref()
                .is_some_and(|(saved_path, _)| saved_path == path)
    }

    /// Take the saved offset for `path`, disarming the restore flag.
    pub fn consume_scroll_position(&self, path: &str) -> Option<f64> {
        if !self.should_restore(path) {
            return None;
        }
        self.restore.set(false);
        self.saved.borrow().as_ref().map(|(_, offset)| *offset)
    }
}
