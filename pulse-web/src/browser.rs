//! Browser helpers: local storage, scroll offset, current URL

use pulse_common::{KeyValueStorage, PulseError};

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

/// `window.localStorage`
///
/// Private browsing and disabled storage surface as `StorageUnavailable`,
/// which the bookmark store treats as "no bookmarks".
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, PulseError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| PulseError::StorageUnavailable("localStorage is not available".into()))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PulseError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PulseError::StorageUnavailable(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PulseError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PulseError::StorageUnavailable(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), PulseError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| PulseError::StorageUnavailable(format!("{e:?}")))
    }
}

/// Vertical scroll offset of the page, 0 outside a browser.
pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to(offset: f64) {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, offset);
    }
}

/// Full URL of the current page, empty outside a browser.
pub fn current_href() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}
