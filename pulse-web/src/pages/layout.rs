use crate::pages::NewsletterSignUp;
use crate::{Route, SessionSignal};
use dioxus::prelude::*;
use pulse_ui::{AppLayoutView, LoadingNotice, NavItem};

const NAV: [(&str, &str); 4] = [
    ("featured", "Featured"),
    ("latest", "Latest"),
    ("favs", "Favs"),
    ("search", "Search"),
];

/// Navbar id highlighted for `route`
fn active_nav(route: &Route) -> Option<&'static str> {
    match route {
        Route::Featured {} => Some("featured"),
        Route::Latest {} => Some("latest"),
        Route::Bookmarks {} => Some("favs"),
        Route::Search { .. } | Route::SearchTabbed { .. } => Some("search"),
        _ => None,
    }
}

fn nav_route(id: &str) -> Option<Route> {
    match id {
        "featured" => Some(Route::Featured {}),
        "latest" => Some(Route::Latest {}),
        "favs" => Some(Route::Bookmarks {}),
        "search" => Some(Route::Search {
            query: String::new(),
        }),
        _ => None,
    }
}

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();
    let session: SessionSignal = use_context();

    let active = active_nav(&current_route);
    let nav_items = NAV
        .iter()
        .map(|(id, label)| NavItem {
            id: id.to_string(),
            label: label.to_string(),
            is_active: active == Some(*id),
        })
        .collect::<Vec<_>>();

    // Pages pick their bookmark strategy on mount, so they wait for the first check
    let state = session();
    let login_url = state
        .as_ref()
        .filter(|s| !s.logged_in)
        .and_then(|s| s.login_url.clone());
    let username = state.as_ref().and_then(|s| s.username.clone());

    rsx! {
        AppLayoutView {
            nav_items,
            on_nav_click: move |id: String| {
                if let Some(route) = nav_route(&id) {
                    navigator().push(route);
                }
            },
            login_url,
            username,
            if state.is_some() {
                Outlet::<Route> {}
                NewsletterSignUp {}
            } else {
                LoadingNotice {}
            }
        }
    }
}
