use crate::api::HttpPulseApi;
use crate::browser::LocalStorage;
use pulse_common::api::PulseApi;
use pulse_common::{
    strategy_for, BookmarkMutation, BookmarkStore, PulseConfig, UserSession, ViewStateTracker,
};
use std::rc::Rc;

/// Page-wide services, provided as context by `App`
#[derive(Clone)]
pub struct AppServices {
    pub api: Rc<dyn PulseApi>,
    pub session: Rc<UserSession>,
    pub view_state: Rc<ViewStateTracker>,
    pub bookmarks: BookmarkStore,
    pub config: Rc<PulseConfig>,
}

impl AppServices {
    pub fn new(config: PulseConfig) -> Self {
        let session = Rc::new(UserSession::new());
        let api: Rc<dyn PulseApi> = Rc::new(HttpPulseApi::new(config.clone(), session.clone()));
        Self {
            api,
            session,
            view_state: Rc::new(ViewStateTracker::new()),
            bookmarks: BookmarkStore::new(Rc::new(LocalStorage)),
            config: Rc::new(config),
        }
    }

    /// Bookmark mutation path for the current login state.
    pub fn bookmark_strategy(&self) -> Rc<dyn BookmarkMutation> {
        strategy_for(&self.session, &self.bookmarks, self.api.clone())
    }
}
