//! pulse-common - Client state and rules for the Network Pulse web app
//!
//! Everything here is framework-free so it can be shared by the view crate
//! and the web app, and tested natively.

pub mod analytics;
pub mod api;
pub mod bookmark_toggle;
pub mod bookmarks;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod session;
pub mod signup;
pub mod storage;
pub mod tabs;
pub mod view_state;

pub use bookmark_toggle::{
    strategy_for, BookmarkMutation, BookmarkToggleController, LocalMutationStrategy,
    RemoteMutationStrategy, ToggleRequest,
};
pub use bookmarks::{BookmarkSet, BookmarkStore};
pub use config::PulseConfig;
pub use error::PulseError;
pub use models::EntryId;
pub use search::{SearchCriteria, SearchLocation, SearchTab};
pub use session::{ListenerId, SessionEvent, SessionState, UserSession};
pub use signup::{SignupForm, SignupStatus};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use tabs::{select_tab, EntryCounts, ProfileTab, TabDescriptor, TabResolution, TabSelector};
pub use view_state::ViewStateTracker;
