//! Newsletter signup form rules

use crate::error::PulseError;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{error, info};

pub const EMAIL_HINT: &str = "Please enter your email";
pub const CONSENT_HINT: &str = "Please check this box if you want to proceed";
pub const FAILURE_HINT: &str = "Something went wrong. Please check your email address and try again";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Only the end is anchored, matching the form's historical behavior
    PATTERN.get_or_init(|| Regex::new(r"[^@]+@[^.@]+(\.[^.@]+)+$").unwrap())
}

/// Very loose email check: something, `@`, then at least two dot-separated labels.
pub fn validates_as_email(input: &str) -> bool {
    !input.is_empty() && email_pattern().is_match(input)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignupStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Validated payload ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub consent: bool,
    pub tried_submitting: bool,
    pub status: SignupStatus,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and move to `Submitting`. Invalid input is never sent.
    pub fn submit(&mut self) -> Result<SignupRequest, PulseError> {
        self.tried_submitting = true;

        if matches!(self.status, SignupStatus::Submitting | SignupStatus::Succeeded) {
            return Err(PulseError::Validation("signup already submitted".into()));
        }
        if !validates_as_email(&self.email) {
            return Err(PulseError::Validation(EMAIL_HINT.into()));
        }
        if !self.consent {
            return Err(PulseError::Validation(CONSENT_HINT.into()));
        }

        self.status = SignupStatus::Submitting;
        Ok(SignupRequest {
            email: self.email.clone(),
        })
    }

    /// Record the API outcome of a submission.
    pub fn complete(&mut self, result: Result<(), PulseError>) {
        match result {
            Ok(()) => {
                info!("Newsletter signup succeeded");
                self.status = SignupStatus::Succeeded;
            }
            Err(e) => {
                error!("Newsletter signup failed: {e}");
                self.status = SignupStatus::Failed;
            }
        }
    }

    fn submitted(&self) -> bool {
        self.status != SignupStatus::Idle
    }

    pub fn email_hint(&self) -> Option<&'static str> {
        (self.tried_submitting && !self.submitted() && !validates_as_email(&self.email))
            .then_some(EMAIL_HINT)
    }

    pub fn consent_hint(&self) -> Option<&'static str> {
        (self.tried_submitting && !self.submitted() && !self.consent).then_some(CONSENT_HINT)
    }

    pub fn failure_hint(&self) -> Option<&'static str> {
        (self.status == SignupStatus::Failed).then_some(FAILURE_HINT)
    }

    pub fn email_has_danger(&self) -> bool {
        self.failure_hint().is_some()
            || (self.status != SignupStatus::Succeeded
                && self.tried_submitting
                && !validates_as_email(&self.email))
    }

    pub fn consent_has_danger(&self) -> bool {
        self.status != SignupStatus::Succeeded && self.tried_submitting && !self.consent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_examples() {
        assert!(validates_as_email("a@b.co"));
        assert!(validates_as_email("first.last@mail.example.org"));
        assert!(!validates_as_email("a@b"));
        assert!(!validates_as_email(""));
        assert!(!validates_as_email("a@b..com"));
        assert!(!validates_as_email("a@b.com."));
        assert!(!validates_as_email("@b.com"));
    }

    #[test]
    fn test_submit_requires_valid_email() {
        let mut form = SignupForm {
            email: "nope".into(),
            consent: true,
            ..SignupForm::new()
        };
        assert_eq!(
            form.submit(),
            Err(PulseError::Validation(EMAIL_HINT.into()))
        );
        assert_eq!(form.status, SignupStatus::Idle);
        assert_eq!(form.email_hint(), Some(EMAIL_HINT));
        assert!(form.email_has_danger());
    }

    #[test]
    fn test_submit_requires_consent() {
        let mut form = SignupForm {
            email: "a@b.co".into(),
            ..SignupForm::new()
        };
        assert!(form.submit().is_err());
        assert_eq!(form.consent_hint(), Some(CONSENT_HINT));
        assert_eq!(form.email_hint(), None);
    }

    #[test]
    fn test_no_hints_before_first_submit() {
        let form = SignupForm::new();
        assert_eq!(form.email_hint(), None);
        assert_eq!(form.consent_hint(), None);
        assert!(!form.consent_has_danger());
    }

    #[test]
    fn test_successful_submission() {
        let mut form = SignupForm {
            email: "a@b.co".into(),
            consent: true,
            ..SignupForm::new()
        };
        let request = form.submit().unwrap();
        assert_eq!(request.email, "a@b.co");
        assert_eq!(form.status, SignupStatus::Submitting);
        assert!(form.submit().is_err());

        form.complete(Ok(()));
        assert_eq!(form.status, SignupStatus::Succeeded);
        assert_eq!(form.failure_hint(), None);
    }

    #[test]
    fn test_failed_submission_can_retry() {
        let mut form = SignupForm {
            email: "a@b.co".into(),
            consent: true,
            ..SignupForm::new()
        };
        form.submit().unwrap();
        form.complete(Err(PulseError::Network("502".into())));
        assert_eq!(form.failure_hint(), Some(FAILURE_HINT));
        assert!(form.email_has_danger());

        assert!(form.submit().is_ok());
    }
}
