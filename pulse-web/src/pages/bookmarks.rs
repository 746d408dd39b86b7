use crate::pages::ProjectLoader;
use crate::services::AppServices;
use dioxus::prelude::*;
use pulse_common::models::EntryQuery;
use pulse_common::BookmarkStore;

const EMPTY_MESSAGE: &str = "Save your favourite projects by clicking the heart icon.";

/// Query listing the visitor's bookmarks, `None` when there is nothing to list.
///
/// Logged-in users have their bookmarks on the server; anonymous visitors
/// only have the ids kept in local storage.
pub(crate) fn bookmarks_query(logged_in: bool, store: &BookmarkStore) -> Option<EntryQuery> {
    if logged_in {
        return Some(EntryQuery {
            bookmarked_only: true,
            ..EntryQuery::default()
        });
    }

    let bookmarks = store.get()?;
    if bookmarks.is_empty() {
        return None;
    }
    Some(EntryQuery {
        ids: Some(bookmarks.ids().to_vec()),
        ..EntryQuery::default()
    })
}

#[component]
pub fn Bookmarks() -> Element {
    let services: AppServices = use_context();
    let query = use_hook(|| bookmarks_query(services.session.logged_in(), &services.bookmarks));

    rsx! {
        document::Title { "Favs | Mozilla Network Pulse" }
        match query {
            Some(query) => rsx! {
                ProjectLoader { query, empty_message: EMPTY_MESSAGE.to_string() }
            },
            None => rsx! {
                p { class: "text-center py-5", "{EMPTY_MESSAGE}" }
            },
        }
    }
}
