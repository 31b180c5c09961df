use dioxus::prelude::*;

use api::LoadState;

/// Footer of a paged list: a spinner while a page loads, the error message
/// plus a retry button on failure, a small end-of-list note once exhausted.
///
/// Retry is always a manual action — nothing here retries on its own.
#[component]
pub fn LoadStateFooter(state: LoadState, on_retry: EventHandler<()>) -> Element {
    match state {
        LoadState::Loading => rsx! {
            div { class: "load-footer",
                span { class: "spinner" }
            }
        },
        LoadState::Error(err) => {
            let message = err.user_message().to_string();
            rsx! {
                div { class: "load-footer load-footer--error",
                    span { class: "load-footer__message", "{message}" }
                    button {
                        class: "retry-btn",
                        onclick: move |_| on_retry.call(()),
                        "Retry"
                    }
                }
            }
        }
        LoadState::NotLoading { end_reached } => {
            if end_reached {
                rsx! {
                    div { class: "load-footer",
                        span { class: "load-footer__end", "You're all caught up" }
                    }
                }
            } else {
                rsx! {}
            }
        }
    }
}
