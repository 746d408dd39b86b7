//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Filled - for the main call to action
    Primary,
    /// Text only, used for tabs and dismiss controls
    Link,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] active: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Link => "btn btn-link",
    };
    let active_class = if active { "active" } else { "" };

    let computed_class = match &class {
        Some(extra) => format!("{variant_class} {active_class} {extra}"),
        None => format!("{variant_class} {active_class}"),
    };

    rsx! {
        button {
            class: "{computed_class}",
            r#type,
            disabled,
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
