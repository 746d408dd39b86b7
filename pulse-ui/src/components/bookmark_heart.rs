//! Bookmark heart toggle - pure view with callback

use dioxus::prelude::*;

/// Heart icon that beats once per click.
///
/// The bookmarked state is owned by the caller; this only reports clicks.
#[component]
pub fn BookmarkHeart(
    bookmarked: bool,
    /// A toggle for this entry is still pending
    #[props(default)]
    pending: bool,
    on_click: EventHandler<()>,
) -> Element {
    let mut beating = use_signal(|| false);

    let class = format!(
        "heart {} {} {}",
        if bookmarked { "bookmarked" } else { "" },
        if beating() { "beating" } else { "" },
        if pending { "pending" } else { "" },
    );
    let label = if bookmarked {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    rsx! {
        a {
            class: "{class}",
            role: "button",
            aria_label: label,
            aria_pressed: if bookmarked { "true" } else { "false" },
            "data-testid": "bookmark-heart",
            onclick: move |evt| {
                evt.stop_propagation();
                beating.set(true);
                on_click.call(());
            },
            onanimationend: move |_| beating.set(false),
        }
    }
}
