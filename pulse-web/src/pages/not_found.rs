use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        document::Title { "Page not found | Mozilla Network Pulse" }
        div { class: "text-center py-5",
            h2 { class: "h4", "Page not found" }
            p { class: "text-muted", "Nothing lives at /{path}." }
            Link { to: Route::Featured {}, "Back to featured projects" }
        }
    }
}
