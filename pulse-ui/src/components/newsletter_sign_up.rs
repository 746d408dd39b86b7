//! Newsletter signup call to action - pure view over `SignupForm`

use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;
use pulse_common::{SignupForm, SignupStatus};

const DEFAULT_CTA_HEADER: &str = "Protect the internet as a global public resource";
const DEFAULT_CTA_DESCRIPTION: &str = "Join our email list to take action and stay updated!";
const DEFAULT_THANK_YOU: &str = "If you haven’t previously confirmed a subscription to a Mozilla-related newsletter you may have to do so. <strong>Please check your inbox or your spam filter for an email from us.</strong>";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SignupLayout {
    #[default]
    OneColumn,
    TwoColumn,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonPosition {
    #[default]
    Bottom,
    Side,
}

#[component]
pub fn NewsletterSignUpView(
    form: SignupForm,
    #[props(default)] layout: SignupLayout,
    #[props(default)] button_position: ButtonPosition,
    #[props(default = DEFAULT_CTA_HEADER.to_string())] cta_header: String,
    /// Trusted HTML
    #[props(default = DEFAULT_CTA_DESCRIPTION.to_string())]
    cta_description: String,
    /// Trusted HTML
    #[props(default = DEFAULT_THANK_YOU.to_string())]
    thank_you_message: String,
    on_email_input: EventHandler<String>,
    on_consent_change: EventHandler<bool>,
    on_focus: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let succeeded = form.status == SignupStatus::Succeeded;
    let state_class = match form.status {
        SignupStatus::Succeeded => "signup-success",
        SignupStatus::Failed => "signup-fail",
        _ => "",
    };
    let column_class = match layout {
        SignupLayout::TwoColumn => "col-12 col-md-6",
        SignupLayout::OneColumn => "col-12",
    };

    rsx! {
        div { class: "newsletter-sign-up mb-5",
            div { class: "row {state_class}",
                div { class: "{column_class}",
                    h5 { class: "h5-heading",
                        if succeeded {
                            "Thanks!"
                        } else {
                            "{cta_header}"
                        }
                    }
                    if succeeded {
                        p { dangerous_inner_html: "{thank_you_message}" }
                    } else {
                        p { dangerous_inner_html: "{cta_description}" }
                    }
                }
                if !succeeded {
                    div { class: "{column_class}",
                        SignupFormContent {
                            form,
                            button_position,
                            on_email_input,
                            on_consent_change,
                            on_focus,
                            on_submit,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SignupFormContent(
    form: SignupForm,
    button_position: ButtonPosition,
    on_email_input: EventHandler<String>,
    on_consent_change: EventHandler<bool>,
    on_focus: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let (form_class, fields_class, submit_class, privacy_spacing) = match button_position {
        ButtonPosition::Side => ("d-flex flex-column flex-md-row", "", "ml-md-3", "mb-2"),
        ButtonPosition::Bottom => ("d-flex flex-column", "w-100", "w-100", "my-3"),
    };
    let email_danger = if form.email_has_danger() { "has-danger" } else { "" };
    let consent_danger = if form.consent_has_danger() { "has-danger" } else { "" };
    let submitting = form.status == SignupStatus::Submitting;

    rsx! {
        form {
            class: "{form_class}",
            novalidate: true,
            onsubmit: move |e| {
                e.prevent_default();
                on_submit.call(());
            },
            div { class: "fields-wrapper {fields_class}",
                div { class: "mb-2 {email_danger}",
                    input {
                        r#type: "email",
                        class: "form-control",
                        placeholder: "Enter email address",
                        value: "{form.email}",
                        oninput: move |e| on_email_input.call(e.value()),
                        onfocus: move |_| on_focus.call(()),
                    }
                    if let Some(hint) = form.email_hint() {
                        p { class: "body-small form-check form-control-feedback", "{hint}" }
                    }
                    if let Some(hint) = form.failure_hint() {
                        small { class: "form-check form-control-feedback", "{hint}" }
                    }
                }
                div { class: "form-check {privacy_spacing} {consent_danger}",
                    label { class: "form-check-label",
                        input {
                            r#type: "checkbox",
                            class: "form-check-input",
                            id: "PrivacyCheckbox",
                            checked: form.consent,
                            onchange: move |e| on_consent_change.call(e.checked()),
                        }
                        p { class: "d-inline-block body-small my-0",
                            "I'm okay with Mozilla handling my info as explained in this "
                            a { href: "https://www.mozilla.org/privacy/websites/", "Privacy Notice" }
                        }
                        if let Some(hint) = form.consent_hint() {
                            p { class: "body-small form-check form-control-feedback", "{hint}" }
                        }
                    }
                }
            }
            div { class: "{submit_class}",
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: submitting,
                    class: Some("w-100".to_string()),
                    onclick: |_| {},
                    "Sign up"
                }
            }
        }
    }
}
