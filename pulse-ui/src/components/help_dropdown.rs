//! Help-type filter dropdown for the search page

use dioxus::prelude::*;
use pulse_common::models::HelpType;

#[component]
pub fn HelpDropdown(
    /// Selected help type value, empty for no filter
    value: String,
    help_types: Vec<HelpType>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "form-control help-dropdown",
            aria_label: "Filter by how people can help",
            value: "{value}",
            onchange: move |e| on_change.call(e.value()),
            option { value: "", selected: value.is_empty(), "How can people help?" }
            for help_type in help_types.iter() {
                option {
                    key: "{help_type.value}",
                    value: "{help_type.value}",
                    selected: help_type.value == value,
                    "{help_type.label}"
                }
            }
        }
    }
}
