//! Keyword search and help-type filtering

use crate::pages::{NotFound, ProjectLoader};
use crate::services::AppServices;
use crate::{pathname, Route};
use dioxus::prelude::*;
use pulse_common::analytics::AnalyticsEvent;
use pulse_common::models::{Creator, Entry, EntryQuery};
use pulse_common::search::{self, SearchCriteria, SearchLocation, SearchTab};
use pulse_ui::{ErrorNotice, HelpDropdown, LoadingNotice, SearchBar};
use tracing::error;

/// Route for an encoded search location.
pub(crate) fn search_route(location: &SearchLocation) -> Route {
    let query = location.query.clone();
    match location
        .pathname
        .strip_prefix("/search")
        .map(|rest| rest.trim_matches('/'))
    {
        Some("") | None => Route::Search { query },
        Some(tab) => Route::SearchTabbed {
            tab: tab.to_string(),
            query,
        },
    }
}

/// Creators credited on `entries` whose name contains `keyword`, each listed once.
pub(crate) fn matching_creators(entries: &[Entry], keyword: &str) -> Vec<Creator> {
    let needle = keyword.to_lowercase();
    let mut creators: Vec<Creator> = Vec::new();
    for creator in entries.iter().flat_map(|e| e.related_creators.iter()) {
        if !creator.name.to_lowercase().contains(&needle) {
            continue;
        }
        if !creators
            .iter()
            .any(|c| c.name == creator.name && c.profile_id == creator.profile_id)
        {
            creators.push(creator.clone());
        }
    }
    creators
}

fn tab_class(active: bool) -> String {
    if active {
        "btn btn-link btn-tab text-capitalize active".to_string()
    } else {
        "btn btn-link btn-tab text-capitalize".to_string()
    }
}

fn navigate(criteria: &SearchCriteria, current_path: &str) {
    let location = search::encode(criteria, current_path);
    navigator().push(search_route(&location));
}

#[component]
pub fn Search(query: String) -> Element {
    rsx! {
        SearchPage { tab: None, query }
    }
}

#[component]
pub fn SearchTabbed(tab: String, query: String) -> Element {
    match SearchTab::from_name(&tab) {
        Some(tab) => rsx! {
            SearchPage { tab: Some(tab), query }
        },
        None => rsx! {
            NotFound { segments: vec!["search".to_string(), tab] }
        },
    }
}

#[component]
fn SearchPage(tab: Option<SearchTab>, query: String) -> Element {
    let services: AppServices = use_context();
    let route = use_route::<Route>();
    let current_path = pathname(&route);
    let criteria = search::decode(&query, tab);

    let api = services.api.clone();
    let help_types = use_resource(move || {
        let api = api.clone();
        async move {
            api.help_types().await.inspect_err(|e| {
                error!("Loading help types failed: {e}");
            })
        }
    });
    let help_types = match &*help_types.read() {
        Some(Ok(types)) => types.clone(),
        _ => Vec::new(),
    };

    let on_search = {
        let criteria = criteria.clone();
        let current_path = current_path.clone();
        move |keyword: String| {
            if keyword == criteria.keyword {
                return;
            }
            AnalyticsEvent::keywords_entered(&keyword).send();
            let mut next = criteria.clone();
            next.set_keyword(keyword);
            navigate(&next, &current_path);
        }
    };

    let on_dismiss = {
        let criteria = criteria.clone();
        let current_path = current_path.clone();
        move |_| {
            let mut next = criteria.clone();
            next.clear_keyword();
            navigate(&next, &current_path);
        }
    };

    let on_help_change = {
        let criteria = criteria.clone();
        let current_path = current_path.clone();
        move |help_type: String| {
            AnalyticsEvent::help_filtered(&help_type).send();
            let mut next = criteria.clone();
            next.set_help_type(help_type);
            navigate(&next, &current_path);
        }
    };

    rsx! {
        document::Title { "Search | Mozilla Network Pulse" }
        div { class: "row mt-4 mb-5",
            div { class: "col-12 col-lg-8 mb-4",
                SearchBar {
                    value: criteria.keyword.clone(),
                    on_search,
                    on_dismiss,
                }
            }
            div { class: "col-12 col-lg-4",
                HelpDropdown {
                    value: criteria.help_type.clone(),
                    help_types,
                    on_change: on_help_change,
                }
            }
        }
        SearchResults { criteria }
    }
}

#[component]
fn SearchResults(criteria: SearchCriteria) -> Element {
    if !criteria.help_type.is_empty() {
        let query = EntryQuery {
            help_type: Some(criteria.help_type.clone()),
            ..EntryQuery::default()
        };
        return rsx! {
            ProjectLoader { query }
        };
    }

    if criteria.keyword.is_empty() {
        return rsx! {
            p { class: "text-center text-muted", "Search for projects, people and tags." }
        };
    }

    let active = criteria.effective_tab().unwrap_or(SearchTab::Projects);
    let query = search::encode(&criteria, "/search").query;
    let keyword = criteria.keyword.clone();

    rsx! {
        div { class: "tab-control-container mb-4",
            for tab in SearchTab::ALL {
                Link {
                    key: "{tab.name()}",
                    class: tab_class(tab == active),
                    to: Route::SearchTabbed {
                        tab: tab.name().to_string(),
                        query: query.clone(),
                    },
                    "{tab.name()}"
                }
            }
        }
        match active {
            SearchTab::Projects => rsx! {
                ProjectLoader {
                    query: EntryQuery {
                        search: Some(keyword),
                        ..EntryQuery::default()
                    },
                }
            },
            SearchTab::People => rsx! {
                PeopleResults { keyword }
            },
        }
    }
}

#[component]
fn PeopleResults(keyword: String) -> Element {
    let services: AppServices = use_context();
    let api = services.api.clone();
    let page_size = services.config.page_size;
    let results = use_resource(use_reactive!(|keyword| {
        let api = api.clone();
        async move {
            let query = EntryQuery {
                search: Some(keyword.clone()),
                page: 1,
                page_size,
                ..EntryQuery::default()
            };
            api.entries(&query)
                .await
                .map(|page| matching_creators(&page.results, &keyword))
        }
    }));

    let creators = match &*results.read() {
        None => return rsx! { LoadingNotice {} },
        Some(Err(e)) => {
            return rsx! {
                ErrorNotice { message: e.to_string() }
            }
        }
        Some(Ok(creators)) => creators.clone(),
    };

    if creators.is_empty() {
        return rsx! {
            p { class: "text-center py-5", "No people found." }
        };
    }

    rsx! {
        ul { class: "list-unstyled",
            for creator in creators {
                li { class: "mb-2",
                    if let Some(profile_id) = creator.profile_id {
                        Link { to: Route::Profile { profile_id }, "{creator.name}" }
                    } else {
                        span { "{creator.name}" }
                    }
                }
            }
        }
    }
}
