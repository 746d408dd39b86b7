pub mod api;
pub mod browser;
pub mod pages;
pub mod services;

use dioxus::prelude::*;
use pages::{
    AppLayout, Bookmarks, EntryDetail, Featured, Issue, Issues, Latest, NotFound, Profile,
    ProfileTabbed, Search, SearchTabbed, Tag,
};
use pulse_common::{PulseConfig, SessionState};
use services::AppServices;
use tracing::info;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[redirect("/", || Route::Featured {})]
    #[redirect("/tags", || Route::Latest {})]
    #[route("/featured")]
    Featured {},
    #[route("/latest")]
    Latest {},
    #[route("/favs")]
    Bookmarks {},
    #[route("/issues")]
    Issues {},
    #[route("/issues/:issue")]
    Issue { issue: String },
    #[route("/tags/:tag")]
    Tag { tag: String },
    #[route("/entry/:entry_id?:..query")]
    EntryDetail { entry_id: u64, query: String },
    #[route("/search?:..query")]
    Search { query: String },
    #[route("/search/:tab?:..query")]
    SearchTabbed { tab: String, query: String },
    #[route("/profile/:profile_id")]
    Profile { profile_id: u64 },
    #[route("/profile/:profile_id/:tab")]
    ProfileTabbed { profile_id: u64, tab: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Path part of a route, without the query string
pub fn pathname(route: &Route) -> String {
    let url = route.to_string();
    match url.split_once('?') {
        Some((path, _)) => path.to_string(),
        None => url,
    }
}

/// Latest verified session, `None` until the first check finishes
pub type SessionSignal = Signal<Option<SessionState>>;

#[component]
pub fn App() -> Element {
    let services = use_context_provider(|| AppServices::new(PulseConfig::from_env()));
    let session_state: SessionSignal = use_context_provider(|| Signal::new(None));

    let listener = use_hook(|| {
        services.session.add_listener(move |event, state| {
            info!(?event, logged_in = state.logged_in, "Session updated");
            let mut session_state = session_state;
            session_state.set(Some(state.clone()));
        })
    });

    use_hook(|| {
        let services = services.clone();
        spawn(async move {
            services
                .session
                .verify(services.api.as_ref(), &browser::current_href())
                .await;
        })
    });

    let session = services.session.clone();
    use_drop(move || {
        session.remove_listener(listener);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Mozilla Network Pulse" }
        Router::<Route> {}
    }
}
