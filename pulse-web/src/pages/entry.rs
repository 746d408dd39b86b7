use crate::pages::BookmarkableEntryCard;
use crate::services::AppServices;
use crate::{browser, Route};
use dioxus::prelude::*;
use pulse_ui::{EntryUnavailable, LoadingNotice};
use tracing::{error, warn};

const JUST_POSTED: &str = "justPostedByUser";

/// Remove the `justPostedByUser` flag from a query string.
///
/// Returns whether the flag was set to `true`, and the remaining query.
pub(crate) fn take_just_posted(query: &str) -> (bool, String) {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            warn!("Ignoring malformed entry query {query:?}: {e}");
            return (false, String::new());
        }
    };

    let just_posted = pairs
        .iter()
        .any(|(key, value)| key == JUST_POSTED && value == "true");
    let rest: Vec<(String, String)> = pairs
        .into_iter()
        .filter(|(key, _)| key != JUST_POSTED)
        .collect();
    (
        just_posted,
        serde_urlencoded::to_string(&rest).unwrap_or_default(),
    )
}

#[component]
pub fn EntryDetail(entry_id: u64, query: String) -> Element {
    let services: AppServices = use_context();

    // Remember where the list was scrolled to, and restore it on the way back
    let view_state = services.view_state.clone();
    use_hook(move || view_state.set_scroll_position(browser::scroll_offset()));
    let view_state = services.view_state.clone();
    use_drop(move || view_state.set_restore(true));

    let just_posted = use_hook(|| take_just_posted(&query).0);
    use_effect(use_reactive!(|query| {
        let (flagged, rest) = take_just_posted(&query);
        if flagged {
            navigator().replace(Route::EntryDetail { entry_id, query: rest });
        }
    }));

    let api = services.api.clone();
    let entry = use_resource(use_reactive!(|entry_id| {
        let api = api.clone();
        async move { api.entry(entry_id).await }
    }));

    let loaded = match &*entry.read() {
        None => return rsx! { LoadingNotice {} },
        Some(Err(e)) => {
            error!("Loading entry {entry_id} failed: {e}");
            None
        }
        Some(Ok(entry)) => Some(entry.clone()),
    };

    let Some(loaded) = loaded else {
        return rsx! {
            document::Title { "Entry unavailable | Mozilla Network Pulse" }
            EntryUnavailable {}
        };
    };

    rsx! {
        document::Title { "{loaded.title} | Mozilla Network Pulse" }
        if just_posted {
            div { class: "alert alert-success", "Thanks for submitting!" }
        }
        BookmarkableEntryCard { key: "{loaded.id}", entry: loaded.clone(), detailed: true }
    }
}
