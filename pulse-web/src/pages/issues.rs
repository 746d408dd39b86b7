use crate::services::AppServices;
use crate::Route;
use dioxus::prelude::*;
use pulse_ui::{ErrorNotice, LoadingNotice};
use tracing::error;

/// Index of internet health issues, each linking to its entry list
#[component]
pub fn Issues() -> Element {
    let services: AppServices = use_context();
    let api = services.api.clone();
    let issues = use_resource(move || {
        let api = api.clone();
        async move { api.issues().await }
    });

    let body = match &*issues.read() {
        None => rsx! { LoadingNotice {} },
        Some(Err(e)) => {
            error!("Loading issues failed: {e}");
            rsx! { ErrorNotice { message: e.to_string() } }
        }
        Some(Ok(issues)) => rsx! {
            ul { class: "list-unstyled issue-list",
                for issue in issues.iter().cloned() {
                    li { key: "{issue.name}", class: "mb-4",
                        Link {
                            class: "h5",
                            to: Route::Issue { issue: issue.name.clone() },
                            "{issue.name}"
                        }
                        if !issue.description.is_empty() {
                            p { class: "text-muted", "{issue.description}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        document::Title { "Issues | Mozilla Network Pulse" }
        h2 { class: "h4 mb-4", "Issues" }
        {body}
    }
}
