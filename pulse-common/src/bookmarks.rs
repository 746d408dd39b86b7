//! Local bookmarks for visitors who are not logged in

use crate::error::PulseError;
use crate::models::EntryId;
use crate::storage::KeyValueStorage;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::warn;

/// Storage key holding the serialized bookmark list.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Ordered list of bookmarked entry ids, most recently bookmarked first.
///
/// Ids are unique. Stored lists are deduplicated on read, keeping the first
/// occurrence of each id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<EntryId>", into = "Vec<EntryId>")]
pub struct BookmarkSet {
    ids: Vec<EntryId>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.ids.contains(&id)
    }

    /// Prepend `id`. Returns false if it was already present.
    pub fn bookmark(&mut self, id: EntryId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.insert(0, id);
        true
    }

    /// Remove `id`. Returns false if it was not present.
    pub fn unbookmark(&mut self, id: EntryId) -> bool {
        match self.ids.iter().position(|&existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip membership of `id` and return whether it is now bookmarked.
    pub fn toggle(&mut self, id: EntryId) -> bool {
        if self.unbookmark(id) {
            false
        } else {
            self.bookmark(id)
        }
    }

    pub fn ids(&self) -> &[EntryId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<EntryId> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = EntryId>>(iter: I) -> Self {
        let mut set = BookmarkSet::new();
        for id in iter {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }
}

impl From<Vec<EntryId>> for BookmarkSet {
    fn from(ids: Vec<EntryId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<BookmarkSet> for Vec<EntryId> {
    fn from(set: BookmarkSet) -> Self {
        set.ids
    }
}

/// Bookmark list persisted in key/value storage.
///
/// Cloning shares the backing storage, so a write through one handle is
/// visible to every other handle immediately.
#[derive(Clone)]
pub struct BookmarkStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl BookmarkStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Stored bookmarks, or `None` if nothing usable is stored.
    pub fn get(&self) -> Option<BookmarkSet> {
        let raw = match self.storage.get_item(BOOKMARKS_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Reading bookmarks failed, treating as empty: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(set) => Some(set),
            Err(e) => {
                warn!("Stored bookmarks are unreadable, treating as empty: {e}");
                None
            }
        }
    }

    /// Stored bookmarks, empty when nothing is stored.
    pub fn get_or_empty(&self) -> BookmarkSet {
        self.get().unwrap_or_default()
    }

    pub fn set(&self, bookmarks: &BookmarkSet) -> Result<(), PulseError> {
        let raw = serde_json::to_string(bookmarks)?;
        self.storage.set_item(BOOKMARKS_KEY, &raw)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get().is_some_and(|set| set.contains(id))
    }
}
