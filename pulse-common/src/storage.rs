//! Key/value storage seam
//!
//! The browser's `localStorage` is the production backend (see `pulse-web`).
//! `MemoryStorage` backs tests and non-browser builds.

use crate::error::PulseError;
use std::cell::RefCell;
use std::collections::HashMap;

/// Synchronous string key/value storage, as exposed by `localStorage`.
pub trait KeyValueStorage {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>, PulseError>;

    /// Write a value, replacing any previous one.
    fn set_item(&self, key: &str, value: &str) -> Result<(), PulseError>;

    /// Delete a value. Not an error if the key does not exist.
    fn remove_item(&self, key: &str) -> Result<(), PulseError>;
}

/// In-memory storage. Writes are visible to every holder of the same instance.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PulseError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PulseError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PulseError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
