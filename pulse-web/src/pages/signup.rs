use crate::browser;
use crate::services::AppServices;
use dioxus::prelude::*;
use pulse_common::analytics::AnalyticsEvent;
use pulse_common::signup::SignupRequest;
use pulse_common::SignupForm;
use pulse_ui::{NewsletterSignUpView, SignupLayout};
use tracing::debug;

/// Newsletter signup shown under every page to logged-in users
#[component]
pub fn NewsletterSignUp() -> Element {
    let services: AppServices = use_context();
    let logged_in = use_signal(|| services.session.logged_in());
    let mut form = use_signal(SignupForm::new);

    let session = services.session.clone();
    let listener = use_hook(move || {
        session.add_listener(move |_, state| {
            let mut logged_in = logged_in;
            logged_in.set(state.logged_in);
        })
    });
    let session = services.session.clone();
    use_drop(move || {
        session.remove_listener(listener);
    });

    if !logged_in() {
        return rsx! {};
    }

    let api = services.api.clone();
    let on_submit = move |_| {
        let Some(request) = submit_attempt(&mut form.write(), |event| event.send()) else {
            return;
        };

        let api = api.clone();
        spawn(async move {
            let result = api.sign_up(&request.email, &browser::current_href()).await;
            form.write().complete(result);
        });
    };

    rsx! {
        NewsletterSignUpView {
            form: form(),
            layout: SignupLayout::TwoColumn,
            on_email_input: move |email: String| form.write().email = email,
            on_consent_change: move |consent: bool| form.write().consent = consent,
            on_focus: move |_| AnalyticsEvent::signup_focused().send(),
            on_submit,
        }
    }
}

/// Record the submit tap, then validate. Returns the request to send, if any.
fn submit_attempt(form: &mut SignupForm, track: impl FnOnce(AnalyticsEvent)) -> Option<SignupRequest> {
    track(AnalyticsEvent::signup_submitted());
    form.submit()
        .inspect_err(|e| debug!("Signup not sent: {e}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_submit_is_still_tracked() {
        let mut form = SignupForm {
            email: "not an email".into(),
            consent: true,
            ..SignupForm::new()
        };
        let mut tracked = Vec::new();
        assert!(submit_attempt(&mut form, |event| tracked.push(event)).is_none());
        assert_eq!(tracked, vec![AnalyticsEvent::signup_submitted()]);
    }

    #[test]
    fn test_valid_submit_returns_request() {
        let mut form = SignupForm {
            email: "ada@example.org".into(),
            consent: true,
            ..SignupForm::new()
        };
        let mut tracked = Vec::new();
        let request = submit_attempt(&mut form, |event| tracked.push(event));
        assert_eq!(request.map(|r| r.email), Some("ada@example.org".to_string()));
        assert_eq!(tracked.len(), 1);
    }
}
