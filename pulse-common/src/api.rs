//! Boundary to the remote Pulse REST API
//!
//! The web app implements this over HTTP; tests use in-memory fakes.
//! Futures are not `Send` because browser fetches are not.

use crate::error::PulseError;
use crate::models::{
    Entry, EntryId, EntryPage, EntryQuery, HelpType, IssueSummary, ProfileEntries, ProfileSummary,
    UserStatus,
};
use crate::tabs::ProfileTab;
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait PulseApi {
    /// Fetch a single entry.
    async fn entry(&self, id: EntryId) -> Result<Entry, PulseError>;

    /// Fetch one page of entries matching `query`.
    async fn entries(&self, query: &EntryQuery) -> Result<EntryPage, PulseError>;

    /// Toggle the server-side bookmark on an entry for the logged-in user.
    async fn put_bookmark(&self, id: EntryId) -> Result<(), PulseError>;

    /// Subscribe `email` to the newsletter. `origin_url` is the page the form was on.
    async fn sign_up(&self, email: &str, origin_url: &str) -> Result<(), PulseError>;

    /// Ways people can help a project.
    async fn help_types(&self) -> Result<Vec<HelpType>, PulseError>;

    /// Issues entries can be filed under.
    async fn issues(&self) -> Result<Vec<IssueSummary>, PulseError>;

    /// Login status of the current browser session.
    async fn user_status(&self) -> Result<UserStatus, PulseError>;

    /// Profile header and entry counts.
    async fn profile(&self, id: u64) -> Result<ProfileSummary, PulseError>;

    /// Entries listed under one tab of a profile.
    async fn profile_entries(&self, id: u64, tab: ProfileTab) -> Result<ProfileEntries, PulseError>;

    /// Login URL that returns to `original_url` afterwards.
    fn login_url(&self, original_url: &str) -> String;
}
