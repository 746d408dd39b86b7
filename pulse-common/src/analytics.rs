//! Analytics events
//!
//! Events are emitted as structured tracing events under the `analytics`
//! target. Shipping them to an analytics backend is left to whatever
//! subscriber is installed.

use crate::models::EntryId;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
    /// `beacon` for events fired right before navigating away
    pub transport: Option<&'static str>,
}

impl AnalyticsEvent {
    pub fn new(category: impl Into<String>, action: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
            transport: None,
        }
    }

    pub fn beacon(mut self) -> Self {
        self.transport = Some("beacon");
        self
    }

    /// Bookmark heart clicked on an entry card. `bookmarked` is the state before the click.
    pub fn bookmark_clicked(id: EntryId, title: &str, bookmarked: bool) -> Self {
        Self::new(
            "Entry Card - Bookmark button",
            if bookmarked { "Unbookmarked" } else { "Bookmarked" },
            format!("{id} - {title}"),
        )
    }

    pub fn keywords_entered(keyword: &str) -> Self {
        Self::new("Search", "Keywords entered", keyword)
    }

    pub fn help_filtered(help_type: &str) -> Self {
        Self::new("Search", "Help filtered", help_type)
    }

    pub fn signup_submitted() -> Self {
        Self::new("signup", "form submit tap", "Signup submitted")
    }

    pub fn signup_focused() -> Self {
        Self::new("signup", "form focus", "Signup form input focused")
    }

    pub fn visit_clicked(title: &str) -> Self {
        Self::new("Entry", "Visit button tap", title).beacon()
    }

    pub fn creator_clicked(title: &str, creator: &str) -> Self {
        Self::new("Entry", "Creator tap", format!("{title} - {creator}"))
    }

    pub fn submitter_clicked(title: &str, publisher: &str) -> Self {
        Self::new("Entry", "Submitter tap", format!("{title} - {publisher}"))
    }

    pub fn twitter_share_clicked(title: &str) -> Self {
        Self::new("Entry", "Twitter share tap", title).beacon()
    }

    pub fn send(&self) {
        info!(
            target: "analytics",
            category = %self.category,
            action = %self.action,
            label = %self.label,
            transport = self.transport.unwrap_or(""),
            "event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_event_reflects_previous_state() {
        let e = AnalyticsEvent::bookmark_clicked(7, "Lightbeam", false);
        assert_eq!(e.action, "Bookmarked");
        assert_eq!(e.label, "7 - Lightbeam");

        let e = AnalyticsEvent::bookmark_clicked(7, "Lightbeam", true);
        assert_eq!(e.action, "Unbookmarked");
    }

    #[test]
    fn test_visit_uses_beacon() {
        let e = AnalyticsEvent::visit_clicked("Lightbeam");
        assert_eq!(e.transport, Some("beacon"));
        e.send();
    }

    #[test]
    fn test_profile_taps_label_title_and_name() {
        let e = AnalyticsEvent::creator_clicked("Lightbeam", "Ada");
        assert_eq!((e.category.as_str(), e.action.as_str()), ("Entry", "Creator tap"));
        assert_eq!(e.label, "Lightbeam - Ada");
        assert_eq!(e.transport, None);

        let e = AnalyticsEvent::submitter_clicked("Lightbeam", "Grace");
        assert_eq!(e.action, "Submitter tap");
        assert_eq!(e.label, "Lightbeam - Grace");
    }

    #[test]
    fn test_twitter_share_uses_beacon() {
        let e = AnalyticsEvent::twitter_share_clicked("Lightbeam");
        assert_eq!(e.action, "Twitter share tap");
        assert_eq!(e.label, "Lightbeam");
        assert_eq!(e.transport, Some("beacon"));
    }
}
