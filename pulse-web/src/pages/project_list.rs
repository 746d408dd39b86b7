//! Paged entry lists: featured, latest, tag and issue pages

use crate::pages::BookmarkableEntryCard;
use crate::services::AppServices;
use crate::{browser, pathname, Route};
use dioxus::prelude::*;
use pulse_common::models::{Entry, EntryPage, EntryQuery};
use pulse_ui::{EntryList, ErrorNotice, LoadingNotice};
use tracing::error;

/// Entries loaded so far for one query
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ListState {
    pub entries: Vec<Entry>,
    pub total: Option<u64>,
    /// Page to request next, `None` once the API reports no further page
    pub next_page: Option<u32>,
}

impl ListState {
    pub fn from_page(page: EntryPage, page_number: u32) -> Self {
        let mut state = Self::default();
        state.append(page, page_number);
        state
    }

    /// Add a later page. Entries already listed are skipped.
    pub fn append(&mut self, page: EntryPage, page_number: u32) {
        self.total = Some(page.count);
        self.next_page = page.next.is_some().then_some(page_number + 1);
        for entry in page.results {
            if !self.entries.iter().any(|e| e.id == entry.id) {
                self.entries.push(entry);
            }
        }
    }

    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Loads and renders entries for `query`, one page at a time
#[component]
pub fn ProjectLoader(
    query: EntryQuery,
    #[props(default = "No results found.".to_string())] empty_message: String,
) -> Element {
    let services: AppServices = use_context();
    let route = use_route::<Route>();
    let mut list = use_signal(ListState::default);
    let mut status = use_signal(|| LoadStatus::Loading);
    let mut loading_more = use_signal(|| false);
    let mut generation = use_signal(|| 0u64);

    let path = pathname(&route);
    let view_state = services.view_state.clone();
    use_effect(use_reactive!(|path| {
        view_state.set_current_pathname(&path);
    }));

    let api = services.api.clone();
    let page_size = services.config.page_size;
    use_effect(use_reactive!(|query| {
        let api = api.clone();
        let this_generation = *generation.peek() + 1;
        generation.set(this_generation);
        status.set(LoadStatus::Loading);

        let mut first_page = query.clone();
        first_page.page = 1;
        first_page.page_size = page_size;
        spawn(async move {
            let result = api.entries(&first_page).await;
            if *generation.peek() != this_generation {
                return;
            }
            match result {
                Ok(page) => {
                    list.set(ListState::from_page(page, 1));
                    status.set(LoadStatus::Ready);
                }
                Err(e) => {
                    error!("Loading entries failed: {e}");
                    status.set(LoadStatus::Failed(e.to_string()));
                }
            }
        });
    }));

    let view_state = services.view_state.clone();
    use_effect(move || {
        if *status.read() != LoadStatus::Ready {
            return;
        }
        let Some(path) = view_state.current_pathname() else {
            return;
        };
        if let Some(offset) = view_state.consume_scroll_position(&path) {
            browser::scroll_to(offset);
        }
    });

    let api = services.api.clone();
    let more_query = query.clone();
    let on_load_more = move |_| {
        let Some(page) = list.read().next_page else {
            return;
        };
        if loading_more() {
            return;
        }
        loading_more.set(true);

        let api = api.clone();
        let mut next = more_query.clone();
        next.page = page;
        next.page_size = page_size;
        let this_generation = *generation.peek();
        spawn(async move {
            let result = api.entries(&next).await;
            if *generation.peek() == this_generation {
                match result {
                    Ok(entries) => list.write().append(entries, page),
                    Err(e) => error!("Loading page {page} failed: {e}"),
                }
            }
            loading_more.set(false);
        });
    };

    let current = status.read().clone();
    match current {
        LoadStatus::Loading => rsx! {
            LoadingNotice {}
        },
        LoadStatus::Failed(message) => rsx! {
            ErrorNotice { message }
        },
        LoadStatus::Ready => {
            let state = list.read().clone();
            rsx! {
                EntryList {
                    count: state.entries.len(),
                    total: state.total,
                    has_more: state.has_more(),
                    loading_more: loading_more(),
                    empty_message,
                    on_load_more,
                    for entry in state.entries {
                        BookmarkableEntryCard { key: "{entry.id}", entry: entry.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Featured() -> Element {
    rsx! {
        document::Title { "Featured | Mozilla Network Pulse" }
        ProjectLoader { query: EntryQuery::featured() }
    }
}

#[component]
pub fn Latest() -> Element {
    rsx! {
        document::Title { "Latest | Mozilla Network Pulse" }
        ProjectLoader { query: EntryQuery::default() }
    }
}

#[component]
pub fn Tag(tag: String) -> Element {
    let query = EntryQuery {
        tag: Some(tag.clone()),
        ..EntryQuery::default()
    };
    rsx! {
        document::Title { "Tag: {tag} | Mozilla Network Pulse" }
        h2 { class: "h4 mb-4", "Tag: {tag}" }
        ProjectLoader { query }
    }
}

#[component]
pub fn Issue(issue: String) -> Element {
    let query = EntryQuery {
        issue: Some(issue.clone()),
        ..EntryQuery::default()
    };
    rsx! {
        document::Title { "{issue} | Mozilla Network Pulse" }
        h2 { class: "h4 mb-4", "{issue}" }
        ProjectLoader { query }
    }
}
