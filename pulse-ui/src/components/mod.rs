//! Shared UI components

pub mod app_layout;
pub mod bookmark_heart;
pub mod button;
pub mod entry_card;
pub mod entry_list;
pub mod help_dropdown;
pub mod notices;
pub mod newsletter_sign_up;
pub mod profile_tabs;
pub mod search_bar;

pub use app_layout::{AppLayoutView, NavItem};
pub use bookmark_heart::BookmarkHeart;
pub use button::{Button, ButtonVariant};
pub use entry_card::{EntryCard, ProfileClick};
pub use entry_list::EntryList;
pub use help_dropdown::HelpDropdown;
pub use newsletter_sign_up::{ButtonPosition, NewsletterSignUpView, SignupLayout};
pub use notices::{EntryUnavailable, ErrorNotice, LoadingNotice};
pub use profile_tabs::ProfileTabControls;
pub use search_bar::SearchBar;
