use crate::browser;
use crate::services::AppServices;
use crate::Route;
use dioxus::prelude::*;
use pulse_common::analytics::AnalyticsEvent;
use pulse_common::models::Entry;
use pulse_common::BookmarkToggleController;
use pulse_ui::{EntryCard, ProfileClick};
use tracing::debug;

/// Entry card wired to bookmarking, analytics and navigation
#[component]
pub fn BookmarkableEntryCard(
    entry: Entry,
    #[props(default)] detailed: bool,
    /// Called with the new bookmarked state after a successful toggle
    on_bookmark_change: Option<EventHandler<bool>>,
) -> Element {
    let services: AppServices = use_context();
    let mut controller = use_signal(|| {
        BookmarkToggleController::new(entry.id, entry.is_bookmarked, services.bookmark_strategy())
    });

    let title = entry.title.clone();
    let on_bookmark = move |_| {
        let Some(request) = controller.write().begin() else {
            return;
        };
        AnalyticsEvent::bookmark_clicked(request.entry_id(), &title, request.was_bookmarked()).send();
        spawn(async move {
            let result = request.run().await;
            controller.write().finish(result, |bookmarked| {
                debug!(bookmarked, "Bookmark toggled");
                if let Some(handler) = on_bookmark_change {
                    handler.call(bookmarked);
                }
            });
        });
    };

    let visit_title = entry.title.clone();
    let share_title = entry.title.clone();
    let profile_title = entry.title.clone();
    let share_url = detailed.then(|| entry.twitter_share_url(&browser::current_href()));
    let (bookmarked, pending) = {
        let controller = controller.read();
        (controller.bookmarked(), controller.in_flight())
    };

    rsx! {
        EntryCard {
            entry,
            bookmarked,
            bookmark_pending: pending,
            detailed,
            share_url,
            on_bookmark,
            on_open: move |entry_id| {
                navigator().push(Route::EntryDetail { entry_id, query: String::new() });
            },
            on_visit: move |_| AnalyticsEvent::visit_clicked(&visit_title).send(),
            on_share: move |_| AnalyticsEvent::twitter_share_clicked(&share_title).send(),
            on_tag_click: move |tag| {
                navigator().push(Route::Tag { tag });
            },
            on_issue_click: move |issue| {
                navigator().push(Route::Issue { issue });
            },
            on_profile_click: move |click: ProfileClick| {
                profile_click_event(&profile_title, &click).send();
                navigator().push(Route::Profile { profile_id: click.profile_id });
            },
        }
    }
}

fn profile_click_event(title: &str, click: &ProfileClick) -> AnalyticsEvent {
    if click.submitter {
        AnalyticsEvent::submitter_clicked(title, &click.name)
    } else {
        AnalyticsEvent::creator_clicked(title, &click.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_click_event_by_role() {
        let mut click = ProfileClick {
            profile_id: 4,
            name: "Ada".to_string(),
            submitter: false,
        };
        assert_eq!(profile_click_event("Lightbeam", &click).action, "Creator tap");

        click.submitter = true;
        let event = profile_click_event("Lightbeam", &click);
        assert_eq!(event.action, "Submitter tap");
        assert_eq!(event.label, "Lightbeam - Ada");
    }
}
