mod bookmarks;
mod entry;
mod entry_card;
mod issues;
mod layout;
mod not_found;
mod profile;
mod project_list;
mod search;
mod signup;

pub use bookmarks::Bookmarks;
pub use entry::EntryDetail;
pub use entry_card::BookmarkableEntryCard;
pub use issues::Issues;
pub use layout::AppLayout;
pub use not_found::NotFound;
pub use profile::{Profile, ProfileTabbed};
pub use project_list::{Featured, Issue, Latest, ProjectLoader, Tag};
pub use search::{Search, SearchTabbed};
pub use signup::NewsletterSignUp;
