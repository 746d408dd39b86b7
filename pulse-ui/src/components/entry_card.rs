//! Entry card component - pure view with callbacks

use crate::components::bookmark_heart::BookmarkHeart;
use dioxus::prelude::*;
use pulse_common::models::Entry;
use pulse_common::EntryId;

/// A creator or submitter name clicked on a card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileClick {
    pub profile_id: u64,
    pub name: String,
    /// The person who submitted the entry rather than a credited creator
    pub submitter: bool,
}

/// One project entry.
///
/// The compact card shows title, thumbnail and description. The detailed
/// variant (entry page) adds the why-interesting blurb, get-involved block,
/// issues, tags, a Twitter share link when `share_url` is set, and a visit
/// button. Navigation goes through callbacks.
#[component]
pub fn EntryCard(
    entry: Entry,
    bookmarked: bool,
    #[props(default)] bookmark_pending: bool,
    #[props(default)] detailed: bool,
    #[props(default)] share_url: Option<String>,
    on_bookmark: EventHandler<()>,
    on_open: EventHandler<EntryId>,
    on_visit: EventHandler<()>,
    on_share: EventHandler<()>,
    on_tag_click: EventHandler<String>,
    on_issue_click: EventHandler<String>,
    on_profile_click: EventHandler<ProfileClick>,
) -> Element {
    let entry_id = entry.id;
    let title = entry.title.clone();
    let card_class = if detailed {
        "project-card detail-view col-12"
    } else {
        "project-card col-md-6 col-lg-4"
    };

    rsx! {
        div { class: "{card_class}", "data-testid": "entry-card",
            if let Some(thumbnail) = &entry.thumbnail {
                div { class: "thumbnail",
                    img {
                        src: "{thumbnail}",
                        alt: "Thumbnail for {title}",
                        onclick: move |_| on_open.call(entry_id),
                    }
                }
            }
            div { class: "main-content",
                div { class: "d-flex justify-content-between align-items-start",
                    h2 {
                        class: "title",
                        onclick: move |_| on_open.call(entry_id),
                        "{title}"
                    }
                    div { class: "d-flex share",
                        BookmarkHeart {
                            bookmarked,
                            pending: bookmark_pending,
                            on_click: move |_| on_bookmark.call(()),
                        }
                        if let Some(url) = &share_url {
                            a {
                                class: "circle-twitter ml-3",
                                href: "{url}",
                                aria_label: "Share on Twitter",
                                onclick: move |_| on_share.call(()),
                            }
                        }
                    }
                }
                if !entry.related_creators.is_empty() {
                    p { class: "creators small",
                        "By "
                        for (i, creator) in entry.related_creators.iter().enumerate() {
                            if i > 0 {
                                ", "
                            }
                            if let Some(profile_id) = creator.profile_id {
                                a {
                                    key: "{profile_id}",
                                    class: "creator",
                                    onclick: {
                                        let name = creator.name.clone();
                                        move |_| {
                                            on_profile_click
                                                .call(ProfileClick {
                                                    profile_id,
                                                    name: name.clone(),
                                                    submitter: false,
                                                })
                                        }
                                    },
                                    "{creator.name}"
                                }
                            } else {
                                span { class: "creator", "{creator.name}" }
                            }
                        }
                    }
                }
                if let Some(description) = &entry.description {
                    p { class: "description", "{description}" }
                }
                if detailed {
                    EntryDetails {
                        entry: entry.clone(),
                        on_visit,
                        on_tag_click,
                        on_issue_click,
                        on_profile_click,
                    }
                }
            }
        }
    }
}

#[component]
fn EntryDetails(
    entry: Entry,
    on_visit: EventHandler<()>,
    on_tag_click: EventHandler<String>,
    on_issue_click: EventHandler<String>,
    on_profile_click: EventHandler<ProfileClick>,
) -> Element {
    let created = entry.created_label();

    rsx! {
        if let Some(interest) = &entry.interest {
            div { class: "why-interesting",
                h3 { class: "h6", "Why is this interesting?" }
                p { "{interest}" }
            }
        }
        if entry.get_involved.is_some() || entry.get_involved_url.is_some() {
            div { class: "get-involved",
                if let Some(text) = &entry.get_involved {
                    p { "{text}" }
                }
                if let Some(url) = &entry.get_involved_url {
                    a { href: "{url}", target: "_blank", "Get involved" }
                }
            }
        }
        if !entry.tags.is_empty() || !entry.issues.is_empty() {
            div { class: "issues-and-tags",
                for issue in entry.issues.iter().cloned() {
                    a {
                        key: "issue-{issue}",
                        class: "btn btn-xs btn-issue",
                        onclick: {
                            let issue = issue.clone();
                            move |_| on_issue_click.call(issue.clone())
                        },
                        "{issue}"
                    }
                }
                for tag in entry.tags.iter().cloned() {
                    a {
                        key: "tag-{tag}",
                        class: "btn btn-xs btn-tag",
                        onclick: {
                            let tag = tag.clone();
                            move |_| on_tag_click.call(tag.clone())
                        },
                        "{tag}"
                    }
                }
            }
        }
        if created.is_some() || entry.published_by.is_some() {
            p { class: "time-posted small",
                "Added"
                if let Some(date) = &created {
                    " {date}"
                }
                if let Some(publisher) = &entry.published_by {
                    " by "
                    if let Some(profile_id) = entry.submitter_profile_id {
                        a {
                            onclick: {
                                let name = publisher.clone();
                                move |_| {
                                    on_profile_click
                                        .call(ProfileClick {
                                            profile_id,
                                            name: name.clone(),
                                            submitter: true,
                                        })
                                }
                            },
                            "{publisher}"
                        }
                    } else {
                        "{publisher}"
                    }
                }
            }
        }
        if let Some(url) = &entry.content_url {
            a {
                href: "{url}",
                target: "_blank",
                class: "btn btn-block btn-primary",
                onclick: move |_| on_visit.call(()),
                "Visit"
            }
        }
    }
}
