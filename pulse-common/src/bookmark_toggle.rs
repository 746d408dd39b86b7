//! Bookmark toggling for a single entry
//!
//! Logged-in users bookmark on the server; everyone else bookmarks into
//! local storage. The strategy is picked once when the entry is mounted.
//! The UI flag only flips after the mutation went through, so a failed
//! remote call leaves nothing to roll back.

use crate::api::PulseApi;
use crate::bookmarks::BookmarkStore;
use crate::error::PulseError;
use crate::models::EntryId;
use crate::session::UserSession;
use async_trait::async_trait;
use std::rc::Rc;
use tracing::{debug, error, warn};

/// How a bookmark change is applied
#[async_trait(?Send)]
pub trait BookmarkMutation {
    /// Bookmarked state to show before any interaction.
    fn initial_status(&self, id: EntryId, server_flag: bool) -> bool;

    /// Flip the bookmark on `id` and return the new state.
    async fn apply(&self, id: EntryId, bookmarked: bool) -> Result<bool, PulseError>;
}

/// Bookmarks kept in browser storage, for visitors who are not logged in
pub struct LocalMutationStrategy {
    store: BookmarkStore,
}

impl LocalMutationStrategy {
    pub fn new(store: BookmarkStore) -> Self {
        Self { store }
    }
}

#[async_trait(?Send)]
impl BookmarkMutation for LocalMutationStrategy {
    fn initial_status(&self, id: EntryId, _server_flag: bool) -> bool {
        self.store.contains(id)
    }

    async fn apply(&self, id: EntryId, bookmarked: bool) -> Result<bool, PulseError> {
        let mut bookmarks = self.store.get_or_empty();
        if bookmarked {
            bookmarks.unbookmark(id);
        } else {
            bookmarks.bookmark(id);
        }

        if let Err(e) = self.store.set(&bookmarks) {
            warn!("Saving local bookmark for entry {id} failed: {e}");
            return Err(e);
        }
        debug!(id, bookmarked = !bookmarked, "Local bookmark saved");
        Ok(!bookmarked)
    }
}

/// Bookmarks stored on the server for the logged-in user
pub struct RemoteMutationStrategy {
    api: Rc<dyn PulseApi>,
}

impl RemoteMutationStrategy {
    pub fn new(api: Rc<dyn PulseApi>) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl BookmarkMutation for RemoteMutationStrategy {
    fn initial_status(&self, _id: EntryId, server_flag: bool) -> bool {
        server_flag
    }

    async fn apply(&self, id: EntryId, bookmarked: bool) -> Result<bool, PulseError> {
        match self.api.put_bookmark(id).await {
            Ok(()) => Ok(!bookmarked),
            Err(e) => {
                error!("Bookmark request for entry {id} failed: {e}");
                Err(e)
            }
        }
    }
}

/// Pick the mutation path for the current login state.
pub fn strategy_for(
    session: &UserSession,
    store: &BookmarkStore,
    api: Rc<dyn PulseApi>,
) -> Rc<dyn BookmarkMutation> {
    if session.logged_in() {
        Rc::new(RemoteMutationStrategy::new(api))
    } else {
        Rc::new(LocalMutationStrategy::new(store.clone()))
    }
}

/// A toggle that has been started but not applied yet
pub struct ToggleRequest {
    entry_id: EntryId,
    bookmarked: bool,
    strategy: Rc<dyn BookmarkMutation>,
}

impl ToggleRequest {
    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }

    /// Bookmarked state at the time of the click
    pub fn was_bookmarked(&self) -> bool {
        self.bookmarked
    }

    pub async fn run(self) -> Result<bool, PulseError> {
        self.strategy.apply(self.entry_id, self.bookmarked).await
    }
}

/// Bookmark state of one displayed entry
pub struct BookmarkToggleController {
    entry_id: EntryId,
    bookmarked: bool,
    in_flight: bool,
    strategy: Rc<dyn BookmarkMutation>,
}

impl BookmarkToggleController {
    pub fn new(entry_id: EntryId, server_flag: bool, strategy: Rc<dyn BookmarkMutation>) -> Self {
        Self {
            entry_id,
            bookmarked: strategy.initial_status(entry_id, server_flag),
            in_flight: false,
            strategy,
        }
    }

    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }

    pub fn bookmarked(&self) -> bool {
        self.bookmarked
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a toggle. `None` while another toggle for this entry is pending.
    pub fn begin(&mut self) -> Option<ToggleRequest> {
        if self.in_flight {
            debug!(id = self.entry_id, "Ignoring bookmark click while a toggle is pending");
            return None;
        }
        self.in_flight = true;
        Some(ToggleRequest {
            entry_id: self.entry_id,
            bookmarked: self.bookmarked,
            strategy: self.strategy.clone(),
        })
    }

    /// Apply the outcome of a `ToggleRequest`.
    ///
    /// `on_update` only runs on success, with the new state.
    pub fn finish(&mut self, result: Result<bool, PulseError>, on_update: impl FnOnce(bool)) {
        self.in_flight = false;
        if let Ok(bookmarked) = result {
            self.bookmarked = bookmarked;
            on_update(bookmarked);
        }
    }

    /// `begin`, `run` and `finish` in one go, for callers that can hold the
    /// controller across the await.
    pub async fn toggle(&mut self, on_update: impl FnOnce(bool)) -> Result<bool, PulseError> {
        let Some(request) = self.begin() else {
            return Ok(self.bookmarked);
        };
        let result = request.run().await;
        let outcome = result.clone();
        self.finish(result, on_update);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::BookmarkSet;
    use crate::models::{Entry, EntryPage, EntryQuery, HelpType, IssueSummary, ProfileEntries, ProfileSummary, UserStatus};
    use crate::tabs::ProfileTab;
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use std::cell::{Cell, RefCell};

    /// Initialize tracing for tests
    fn tracing_init() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    #[derive(Default)]
    struct FakeApi {
        fail_bookmark: bool,
        bookmark_calls: RefCell<Vec<EntryId>>,
    }

    #[async_trait(?Send)]
    impl PulseApi for FakeApi {
        async fn entry(&self, _id: EntryId) -> Result<Entry, PulseError> {
            unimplemented!()
        }
        async fn entries(&self, _query: &EntryQuery) -> Result<EntryPage, PulseError> {
            unimplemented!()
        }
        async fn put_bookmark(&self, id: EntryId) -> Result<(), PulseError> {
            self.bookmark_calls.borrow_mut().push(id);
            if self.fail_bookmark {
                Err(PulseError::Network("500 Internal Server Error".into()))
            } else {
                Ok(())
            }
        }
        async fn sign_up(&self, _email: &str, _origin_url: &str) -> Result<(), PulseError> {
            unimplemented!()
        }
        async fn help_types(&self) -> Result<Vec<HelpType>, PulseError> {
            unimplemented!()
        }
        async fn issues(&self) -> Result<Vec<IssueSummary>, PulseError> {
            unimplemented!()
        }
        async fn user_status(&self) -> Result<UserStatus, PulseError> {
            Ok(UserStatus {
                logged_in: true,
                ..UserStatus::default()
            })
        }
        async fn profile(&self, _id: u64) -> Result<ProfileSummary, PulseError> {
            unimplemented!()
        }
        async fn profile_entries(
            &self,
            _id: u64,
            _tab: ProfileTab,
        ) -> Result<ProfileEntries, PulseError> {
            unimplemented!()
        }
        fn login_url(&self, _original_url: &str) -> String {
            String::new()
        }
    }

    struct ReadOnlyStorage(MemoryStorage);

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, PulseError> {
            self.0.get_item(key)
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), PulseError> {
            Err(PulseError::StorageUnavailable("quota exceeded".into()))
        }
        fn remove_item(&self, _key: &str) -> Result<(), PulseError> {
            Ok(())
        }
    }

    fn memory_store() -> BookmarkStore {
        BookmarkStore::new(Rc::new(MemoryStorage::new()))
    }

    fn local(store: &BookmarkStore, id: EntryId) -> BookmarkToggleController {
        BookmarkToggleController::new(id, false, Rc::new(LocalMutationStrategy::new(store.clone())))
    }

    #[tokio::test]
    async fn test_local_toggle_with_no_prior_bookmarks() {
        let store = memory_store();
        let mut controller = local(&store, 3);
        assert!(!controller.bookmarked());

        let updates = RefCell::new(Vec::new());
        let result = controller.toggle(|b| updates.borrow_mut().push(b)).await;

        assert_eq!(result, Ok(true));
        assert!(controller.bookmarked());
        assert_eq!(*updates.borrow(), vec![true]);
        assert_eq!(store.get().unwrap().ids(), &[3]);
    }

    #[tokio::test]
    async fn test_local_toggle_prepends_and_removes() {
        let store = memory_store();
        store.set(&[1, 2].into_iter().collect()).unwrap();

        let mut controller = local(&store, 9);
        controller.toggle(|_| {}).await.unwrap();
        assert_eq!(store.get().unwrap().ids(), &[9, 1, 2]);

        // A fresh mount sees the stored bookmark
        let mut remounted = local(&store, 9);
        assert!(remounted.bookmarked());
        assert_eq!(remounted.toggle(|_| {}).await, Ok(false));
        assert_eq!(store.get().unwrap().ids(), &[1, 2]);
    }

    #[tokio::test]
    async fn test_local_write_failure_leaves_flag() {
        tracing_init();
        let store = BookmarkStore::new(Rc::new(ReadOnlyStorage(MemoryStorage::new())));
        let mut controller = local(&store, 4);
        let called = Cell::new(false);

        let result = controller.toggle(|_| called.set(true)).await;

        assert!(matches!(result, Err(PulseError::StorageUnavailable(_))));
        assert!(!controller.bookmarked());
        assert!(!called.get());
        assert!(!controller.in_flight());
    }

    #[tokio::test]
    async fn test_remote_toggle_uses_server_flag() {
        let api = Rc::new(FakeApi::default());
        let strategy = Rc::new(RemoteMutationStrategy::new(api.clone()));
        let mut controller = BookmarkToggleController::new(5, true, strategy);
        assert!(controller.bookmarked());

        let updates = RefCell::new(Vec::new());
        assert_eq!(controller.toggle(|b| updates.borrow_mut().push(b)).await, Ok(false));

        assert_eq!(*api.bookmark_calls.borrow(), vec![5]);
        assert_eq!(*updates.borrow(), vec![false]);
    }

    #[tokio::test]
    async fn test_remote_failure_leaves_flag_and_skips_callback() {
        let api = Rc::new(FakeApi {
            fail_bookmark: true,
            ..FakeApi::default()
        });
        let strategy = Rc::new(RemoteMutationStrategy::new(api.clone()));
        let mut controller = BookmarkToggleController::new(5, false, strategy);
        let called = Cell::new(false);

        let result = controller.toggle(|_| called.set(true)).await;

        assert!(result.unwrap_err().is_network());
        assert!(!controller.bookmarked());
        assert!(!called.get());
        assert!(!controller.in_flight());
    }

    #[tokio::test]
    async fn test_remote_toggle_does_not_touch_local_store() {
        let store = memory_store();
        let session = UserSession::new();
        let api: Rc<FakeApi> = Rc::new(FakeApi::default());
        session.verify(api.as_ref(), "/").await;

        let strategy = strategy_for(&session, &store, api.clone());
        let mut controller = BookmarkToggleController::new(8, false, strategy);
        controller.toggle(|_| {}).await.unwrap();

        assert_eq!(store.get(), None);
        assert_eq!(*api.bookmark_calls.borrow(), vec![8]);
    }

    #[tokio::test]
    async fn test_anonymous_session_uses_local_store() {
        let store = memory_store();
        let session = UserSession::new();
        let api: Rc<FakeApi> = Rc::new(FakeApi::default());

        let strategy = strategy_for(&session, &store, api.clone());
        let mut controller = BookmarkToggleController::new(8, true, strategy);
        // Server flag is ignored for anonymous visitors
        assert!(!controller.bookmarked());
        controller.toggle(|_| {}).await.unwrap();

        assert!(store.contains(8));
        assert!(api.bookmark_calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_second_click_while_pending_is_ignored() {
        let store = memory_store();
        let mut controller = local(&store, 1);

        let first = controller.begin().expect("first click starts a toggle");
        assert!(controller.in_flight());
        assert!(controller.begin().is_none());

        let result = first.run().await;
        controller.finish(result, |_| {});
        assert!(controller.bookmarked());
        assert!(controller.begin().is_some());
    }

    #[tokio::test]
    async fn test_toggle_is_its_own_inverse_on_store() {
        let store = memory_store();
        let original: BookmarkSet = [10, 20, 30].into_iter().collect();
        store.set(&original).unwrap();

        let mut controller = local(&store, 15);
        controller.toggle(|_| {}).await.unwrap();
        controller.toggle(|_| {}).await.unwrap();

        assert_eq!(store.get(), Some(original));
    }
}
