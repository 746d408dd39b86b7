//! Profile tab controls

use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;
use pulse_common::ProfileTab;

/// Tab buttons for a profile's available tabs.
///
/// Selecting a tab is reported through `on_select`; the page navigates.
#[component]
pub fn ProfileTabControls(
    available: Vec<ProfileTab>,
    active: Option<ProfileTab>,
    on_select: EventHandler<ProfileTab>,
) -> Element {
    rsx! {
        div { class: "tab-control-container",
            for tab in available {
                Button {
                    key: "{tab.name()}",
                    variant: ButtonVariant::Link,
                    active: active == Some(tab),
                    class: Some("btn-tab open-sans text-capitalize".to_string()),
                    onclick: move |_| on_select.call(tab),
                    "{tab.name()}"
                }
            }
        }
    }
}
