//! Grid wrapper for entry cards with paging

use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn EntryList(
    /// Number of cards rendered in `children`
    count: usize,
    /// Total matches reported by the API, when known
    #[props(default)]
    total: Option<u64>,
    has_more: bool,
    #[props(default)] loading_more: bool,
    #[props(default = "No results found.".to_string())] empty_message: String,
    on_load_more: EventHandler<()>,
    children: Element,
) -> Element {
    if count == 0 {
        return rsx! {
            div { class: "text-center my-5", p { "{empty_message}" } }
        };
    }

    rsx! {
        div { class: "project-list",
            if let Some(total) = total {
                p { class: "result-count small", "{total} results" }
            }
            div { class: "row", {children} }
            if has_more {
                div { class: "text-center my-4",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: loading_more,
                        onclick: move |_| on_load_more.call(()),
                        if loading_more {
                            "Loading..."
                        } else {
                            "View more"
                        }
                    }
                }
            }
        }
    }
}
