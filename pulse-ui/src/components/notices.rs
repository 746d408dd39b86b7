//! Loading and error placeholders

use dioxus::prelude::*;

#[component]
pub fn LoadingNotice(
    #[props(default = "Loading...".to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "loading-notice d-flex justify-content-center align-items-center py-5",
            div { class: "loading-spinner" }
            p { class: "ml-3 mb-0", "{message}" }
        }
    }
}

/// Inline "something went wrong" box shown when a fetch fails
#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div { class: "error-notice text-center my-5",
            p { "{message}" }
        }
    }
}

#[component]
pub fn EntryUnavailable() -> Element {
    rsx! {
        div { class: "text-center",
            div { class: "content",
                p { class: "description", "This entry is not currently available." }
            }
        }
    }
}
