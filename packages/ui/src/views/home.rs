//! Home feed: every review, newest first, with a client-side type filter.

use dioxus::prelude::*;

use api::{catalog, LoadState, Review};

use crate::icons::FaPenToSquare;
use crate::{use_auth, use_pager, Icon, LoadStateFooter, NewReviewDialog, ReviewCard};

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut query = use_signal(String::new);
    let mut show_dialog = use_signal(|| false);

    let pager = use_pager(|| crate::repo::reviews_repository().all_reviews());

    // Filtering happens on what's already loaded; the backend has no search.
    let needle = query().to_lowercase();
    let items: Vec<Review> = pager
        .items()
        .into_iter()
        .filter(|review| {
            needle.is_empty()
                || review.acne_type.to_lowercase().contains(&needle)
                || catalog::display_label(&review.acne_type)
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect();

    let refresh_state = pager.refresh_state();
    let signed_in = auth().session.is_some();

    rsx! {
        div { class: "screen",
            header { class: "screen__header",
                h1 { class: "screen__title", "Community reviews" }
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Filter by acne type...",
                    value: query(),
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            if show_dialog() {
                NewReviewDialog {
                    default_acne_type: None,
                    on_created: move |_| {
                        show_dialog.set(false);
                        // Feed is newest-first, so a refresh surfaces the new post.
                        pager.refresh();
                    },
                    on_cancel: move |_| show_dialog.set(false),
                }
            }

            {match refresh_state {
                LoadState::Loading if items.is_empty() => rsx! {
                    div { class: "screen__loading", span { class: "spinner" } }
                },
                LoadState::Error(err) => {
                    let message = err.user_message().to_string();
                    rsx! {
                        div { class: "empty-state",
                            p { class: "empty-state__message", "{message}" }
                            button {
                                class: "retry-btn",
                                onclick: move |_| pager.refresh(),
                                "Retry"
                            }
                        }
                    }
                }
                _ => rsx! {
                    div { class: "feed",
                        for review in items {
                            ReviewCard { key: "{review.id}", review: review.clone() }
                        }
                        if !pager.end_reached() && !pager.append_state().is_loading() {
                            button {
                                class: "btn btn--ghost feed__more",
                                onclick: move |_| pager.load_more(),
                                "Load more"
                            }
                        }
                        LoadStateFooter {
                            state: pager.append_state(),
                            on_retry: move |_| pager.load_more(),
                        }
                    }
                },
            }}

            if signed_in {
                button {
                    class: "fab",
                    title: "Write a review",
                    onclick: move |_| show_dialog.set(true),
                    Icon { icon: FaPenToSquare, width: 18, height: 18 }
                }
            } else if !auth().loading {
                button {
                    class: "fab fab--muted",
                    title: "Sign in to write a review",
                    onclick: move |_| { nav.push("/signin"); },
                    Icon { icon: FaPenToSquare, width: 18, height: 18 }
                }
            }
        }
    }
}
