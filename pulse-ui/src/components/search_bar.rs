//! Debounced search input with a dismiss button

use dioxus::core::Task;
use dioxus::prelude::*;
use std::rc::Rc;

const DEBOUNCE_MS: u64 = 300;

/// Search box that reports its value after typing pauses.
///
/// `value` is the committed keyword from the URL. Local edits show
/// immediately and are sent through `on_search` once the user stops typing;
/// Enter commits right away.
#[component]
pub fn SearchBar(
    value: String,
    on_search: EventHandler<String>,
    on_dismiss: EventHandler<()>,
    #[props(default = "Search name, keyword, location...".to_string())] placeholder: String,
) -> Element {
    let mut draft = use_signal(|| value.clone());
    let mut pending: Signal<Option<Task>> = use_signal(|| None);
    let mut input_ref: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Back/forward navigation replaces the committed value
    use_effect(use_reactive!(|value| draft.set(value)));

    let mut cancel_pending = move || {
        if let Some(task) = pending.take() {
            task.cancel();
        }
    };

    rsx! {
        div { class: "d-flex align-items-center",
            div { class: "activated search-bar w-100",
                input {
                    id: "search-box",
                    r#type: "search",
                    class: "form-control",
                    value: "{draft}",
                    placeholder: "{placeholder}",
                    oninput: move |e| {
                        let text = e.value();
                        draft.set(text.clone());
                        cancel_pending();
                        let task = spawn(async move {
                            sleep_ms(DEBOUNCE_MS).await;
                            on_search.call(text);
                        });
                        pending.set(Some(task));
                    },
                    onkeyup: move |e| {
                        if e.key() == Key::Enter {
                            cancel_pending();
                            on_search.call(draft());
                        }
                    },
                    onmounted: move |event| async move {
                        let input = event.data();
                        input_ref.set(Some(input.clone()));
                        let _ = input.set_focus(true).await;
                    },
                }
                button {
                    class: "btn dismiss",
                    aria_label: "Clear search",
                    onclick: move |_| {
                        cancel_pending();
                        draft.set(String::new());
                        on_dismiss.call(());
                        if let Some(input) = input_ref() {
                            spawn(async move {
                                let _ = input.set_focus(true).await;
                            });
                        }
                    },
                    "×"
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
