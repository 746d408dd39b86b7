//! Page chrome: navbar, main container, footer

use dioxus::prelude::*;

/// A navigation link in the navbar
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

#[component]
pub fn AppLayoutView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    /// Login link for anonymous visitors, `None` once logged in or unknown
    #[props(default)]
    login_url: Option<String>,
    #[props(default)] username: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "container d-flex justify-content-between align-items-center",
                a {
                    class: "navbar-brand",
                    onclick: move |_| on_nav_click.call("featured".to_string()),
                    "Mozilla Network Pulse"
                }
                div { class: "nav-links",
                    for item in nav_items.iter() {
                        {
                            let id = item.id.clone();
                            let class = if item.is_active { "nav-link active" } else { "nav-link" };
                            rsx! {
                                a {
                                    key: "{item.id}",
                                    class: "{class}",
                                    onclick: move |_| on_nav_click.call(id.clone()),
                                    "{item.label}"
                                }
                            }
                        }
                    }
                    if let Some(name) = &username {
                        span { class: "nav-user small", "{name}" }
                    } else if let Some(url) = &login_url {
                        a { class: "nav-link", href: "{url}", "Sign in" }
                    }
                }
            }
        }
        div { id: "main", class: "container", {children} }
        footer { class: "footer text-center py-4",
            p { class: "small mb-0", "Network Pulse is a project of the Mozilla Foundation." }
        }
    }
}
