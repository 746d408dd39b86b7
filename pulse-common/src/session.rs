//! Login status with publish/subscribe notification
//!
//! One `UserSession` lives for the whole page and is shared through `Rc`.
//! Components register a listener on mount and must remove it before
//! teardown; the session never prunes listeners on its own.

use crate::api::PulseApi;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{info, warn};

/// Events delivered to session listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A `verify` call finished, successfully or not
    Verified,
}

/// Snapshot of the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub username: Option<String>,
    pub moderator: bool,
    /// Sent back as `X-CSRFToken` on mutating API calls
    pub csrf_token: Option<String>,
    /// Where to send the user to log in, returning to the verified location
    pub login_url: Option<String>,
}

/// Handle returned by `add_listener`, used to deregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(SessionEvent, &SessionState)>;

#[derive(Default)]
pub struct UserSession {
    state: RefCell<SessionState>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener_id: Cell<u64>,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn logged_in(&self) -> bool {
        self.state.borrow().logged_in
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.state.borrow().csrf_token.clone()
    }

    pub fn add_listener(&self, listener: impl Fn(SessionEvent, &SessionState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Ask the API who is logged in, then notify listeners with `Verified`.
    ///
    /// A failed status check leaves the session logged out.
    pub async fn verify(&self, api: &dyn PulseApi, location: &str) {
        let status = api.user_status().await;
        let login_url = api.login_url(location);

        {
            let mut state = self.state.borrow_mut();
            match status {
                Ok(status) => {
                    info!(logged_in = status.logged_in, "Session verified");
                    state.logged_in = status.logged_in;
                    state.username = status.username;
                    state.moderator = status.moderator;
                    state.csrf_token = status.csrf_token;
                }
                Err(e) => {
                    warn!("Session verification failed: {e}");
                    *state = SessionState::default();
                }
            }
            state.login_url = Some(login_url);
        }

        self.notify(SessionEvent::Verified);
    }

    fn notify(&self, event: SessionEvent) {
        // Snapshot so listeners can deregister while being notified
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        let state = self.state();
        for listener in listeners {
            listener(event, &state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PulseError;
    use crate::models::{Entry, EntryId, EntryPage, EntryQuery, HelpType, IssueSummary, ProfileEntries, ProfileSummary, UserStatus};
    use crate::tabs::ProfileTab;
    use async_trait::async_trait;

    struct StatusApi {
        status: Result<UserStatus, PulseError>,
    }

    #[async_trait(?Send)]
    impl PulseApi for StatusApi {
        async fn entry(&self, _id: EntryId) -> Result<Entry, PulseError> {
            unimplemented!()
        }
        async fn entries(&self, _query: &EntryQuery) -> Result<EntryPage, PulseError> {
            unimplemented!()
        }
        async fn put_bookmark(&self, _id: EntryId) -> Result<(), PulseError> {
            unimplemented!()
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
            self.status.clone()
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
        fn login_url(&self, original_url: &str) -> String {
            format!("https://api.test/login?original_url={original_url}")
        }
    }

    fn logged_in_api() -> StatusApi {
        StatusApi {
            status: Ok(UserStatus {
                logged_in: true,
                username: Some("ada".into()),
                csrf_token: Some("tok".into()),
                moderator: false,
            }),
        }
    }

    #[tokio::test]
    async fn test_verify_notifies_listeners() {
        let session = UserSession::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        session.add_listener(move |event, state| sink.borrow_mut().push((event, state.logged_in)));

        session.verify(&logged_in_api(), "/featured").await;

        assert_eq!(*seen.borrow(), vec![(SessionEvent::Verified, true)]);
        assert!(session.logged_in());
        assert_eq!(session.csrf_token().as_deref(), Some("tok"));
        assert_eq!(
            session.state().login_url.as_deref(),
            Some("https://api.test/login?original_url=/featured")
        );
    }

    #[tokio::test]
    async fn test_removed_listener_is_not_notified() {
        let session = UserSession::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = session.add_listener(move |_, _| counter.set(counter.get() + 1));

        assert!(session.remove_listener(id));
        assert!(!session.remove_listener(id));
        session.verify(&logged_in_api(), "/").await;

        assert_eq!(calls.get(), 0);
        assert_eq!(session.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_verify_logs_out_and_still_notifies() {
        let session = UserSession::new();
        session.verify(&logged_in_api(), "/").await;
        assert!(session.logged_in());

        let notified = Rc::new(Cell::new(false));
        let flag = notified.clone();
        session.add_listener(move |event, state| {
            assert_eq!(event, SessionEvent::Verified);
            assert!(!state.logged_in);
            flag.set(true);
        });

        let failing = StatusApi {
            status: Err(PulseError::Network("offline".into())),
        };
        session.verify(&failing, "/").await;

        assert!(notified.get());
        assert!(!session.logged_in());
        assert_eq!(session.csrf_token(), None);
    }

    #[tokio::test]
    async fn test_listener_can_deregister_itself() {
        let session = Rc::new(UserSession::new());
        let own_id: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let handle = session.clone();
        let slot = own_id.clone();
        let id = session.add_listener(move |_, _| {
            if let Some(id) = slot.get() {
                handle.remove_listener(id);
            }
        });
        own_id.set(Some(id));

        session.verify(&logged_in_api(), "/").await;
        assert_eq!(session.listener_count(), 0);
    }
}
