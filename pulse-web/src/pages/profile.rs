//! Profile pages with their project and favs tabs

use crate::pages::BookmarkableEntryCard;
use crate::services::AppServices;
use crate::Route;
use dioxus::prelude::*;
use pulse_common::models::ProfileSummary;
use pulse_common::{ProfileTab, TabDescriptor, TabResolution, TabSelector};
use pulse_ui::{EntryList, ErrorNotice, LoadingNotice, ProfileTabControls};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error};

/// Tab selection kept across renders of one profile page
#[derive(Default)]
struct ProfileTabs {
    profile_id: Option<u64>,
    selector: TabSelector,
}

impl ProfileTabs {
    /// Descriptor for `requested`, recomputed only when the requested tab or
    /// the profile changes.
    fn descriptor(&mut self, requested: Option<&str>, summary: &ProfileSummary) -> TabDescriptor {
        if self.profile_id != Some(summary.profile_id) {
            self.profile_id = Some(summary.profile_id);
            self.selector = TabSelector::new(requested, summary.my_profile, &summary.entry_counts);
        } else {
            self.selector
                .update(requested, summary.my_profile, &summary.entry_counts);
        }
        self.selector.descriptor().clone()
    }
}

#[component]
pub fn Profile(profile_id: u64) -> Element {
    rsx! {
        ProfilePage { profile_id, tab: None }
    }
}

#[component]
pub fn ProfileTabbed(profile_id: u64, tab: String) -> Element {
    rsx! {
        ProfilePage { profile_id, tab: Some(tab) }
    }
}

#[component]
fn ProfilePage(profile_id: u64, tab: Option<String>) -> Element {
    let services: AppServices = use_context();
    let tabs = use_hook(|| Rc::new(RefCell::new(ProfileTabs::default())));

    let api = services.api.clone();
    let profile = use_resource(use_reactive!(|profile_id| {
        let api = api.clone();
        async move { api.profile(profile_id).await }
    }));

    let summary = match &*profile.read() {
        None => return rsx! { LoadingNotice {} },
        Some(Err(e)) => {
            error!("Loading profile {profile_id} failed: {e}");
            return rsx! {
                ErrorNotice { message: "This profile is not currently available.".to_string() }
            };
        }
        Some(Ok(summary)) => summary.clone(),
    };

    let requested = tab.as_deref();
    let descriptor = tabs.borrow_mut().descriptor(requested, &summary);
    let name = summary.name.clone().unwrap_or_default();

    let body = match descriptor.resolution(requested) {
        TabResolution::Render(active) => rsx! {
            ProfileTabControls {
                available: descriptor.available.clone(),
                active: Some(active),
                on_select: move |tab: ProfileTab| {
                    navigator().push(Route::ProfileTabbed {
                        profile_id,
                        tab: tab.name().to_string(),
                    });
                },
            }
            ProfileTabContent { key: "{profile_id}-{active.name()}", profile_id, tab: active }
        },
        TabResolution::RedirectToBase { default_tab } => {
            debug!(?default_tab, "Unavailable profile tab, redirecting to base profile");
            rsx! {
                RedirectTo { route: Route::Profile { profile_id } }
            }
        }
        TabResolution::Nothing => rsx! {},
    };

    rsx! {
        document::Title { "{name} | Mozilla Network Pulse" }
        h2 { class: "h4 mb-4", "{name}" }
        {body}
    }
}

/// Replaces the current history entry with `route` once mounted
#[component]
fn RedirectTo(route: Route) -> Element {
    use_effect(move || {
        navigator().replace(route.clone());
    });
    rsx! {}
}

#[component]
fn ProfileTabContent(profile_id: u64, tab: ProfileTab) -> Element {
    let services: AppServices = use_context();
    let api = services.api.clone();
    let entries = use_resource(move || {
        let api = api.clone();
        async move { api.profile_entries(profile_id, tab).await }
    });

    let entries = match &*entries.read() {
        None => return rsx! { LoadingNotice {} },
        Some(Err(e)) => {
            error!("Loading {} for profile {profile_id} failed: {e}", tab.name());
            return rsx! {
                ErrorNotice { message: e.to_string() }
            };
        }
        Some(Ok(entries)) => entries.for_tab(tab),
    };

    rsx! {
        EntryList {
            count: entries.len(),
            has_more: false,
            empty_message: "Nothing here yet.".to_string(),
            on_load_more: |_| {},
            for entry in entries {
                BookmarkableEntryCard { key: "{entry.id}", entry: entry.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_common::EntryCounts;

    fn summary(profile_id: u64, my_profile: bool, favorited: u32) -> ProfileSummary {
        ProfileSummary {
            profile_id,
            name: Some("Ada".to_string()),
            my_profile,
            entry_counts: EntryCounts {
                published: 0,
                created: 0,
                favorited,
            },
        }
    }

    #[test]
    fn test_visited_profile_only_offers_tabs_with_entries() {
        let mut tabs = ProfileTabs::default();
        let descriptor = tabs.descriptor(None, &summary(1, false, 2));
        assert_eq!(descriptor.available, vec![ProfileTab::Favs]);
        assert_eq!(descriptor.resolution(None), TabResolution::Render(ProfileTab::Favs));
    }

    #[test]
    fn test_switching_profile_recomputes_tabs() {
        let mut tabs = ProfileTabs::default();
        let own = tabs.descriptor(Some("projects"), &summary(1, true, 0));
        assert_eq!(own.active, Some(ProfileTab::Projects));

        let other = tabs.descriptor(Some("projects"), &summary(2, false, 0));
        assert!(other.available.is_empty());
        assert_eq!(
            other.resolution(Some("projects")),
            TabResolution::RedirectToBase { default_tab: None }
        );
    }
}
