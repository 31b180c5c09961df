//! The caller's classification history.

use dioxus::prelude::*;

use api::{catalog, ImageSubmission, LoadState};

use crate::format::format_date;
use crate::views::SignInPrompt;
use crate::{use_auth, use_pager, LoadStateFooter};

#[component]
pub fn History() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let pager = use_pager(|| crate::repo::image_repository().submission_history());

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "screen__loading", span { class: "spinner" } }
        };
    }
    if state.session.is_none() {
        return rsx! {
            div { class: "screen",
                header { class: "screen__header",
                    h1 { class: "screen__title", "Your scans" }
                }
                SignInPrompt { message: "Sign in to see your classification history." }
            }
        };
    }

    let refresh_state = pager.refresh_state();

    rsx! {
        div { class: "screen",
            header { class: "screen__header",
                h1 { class: "screen__title", "Your scans" }
                button {
                    class: "btn btn--ghost",
                    onclick: move |_| pager.refresh(),
                    "Refresh"
                }
            }

            {match refresh_state {
                LoadState::Loading if pager.items().is_empty() => rsx! {
                    div { class: "screen__loading", span { class: "spinner" } }
                },
                LoadState::Error(err) => {
                    let message = err.user_message().to_string();
                    if err.is_unauthorized() {
                        // Session token no longer accepted: distinct message
                        // and a path back to sign-in.
                        rsx! {
                            div { class: "screen",
                                SignInPrompt { message }
                            }
                        }
                    } else {
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
                }
                _ => {
                    let items = pager.items();
                    if items.is_empty() {
                        rsx! {
                            div { class: "empty-state",
                                p { class: "empty-state__message",
                                    "No scans yet. Upload a photo to get your first classification."
                                }
                                button {
                                    class: "btn btn--primary",
                                    onclick: move |_| { nav.push("/upload"); },
                                    "Scan a photo"
                                }
                            }
                        }
                    } else {
                        rsx! {
                            div { class: "feed",
                                for submission in items {
                                    SubmissionCard { key: "{submission.id}", submission: submission.clone() }
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
                        }
                    }
                }
            }}
        }
    }
}

#[component]
fn SubmissionCard(submission: ImageSubmission) -> Element {
    let nav = use_navigator();
    let label = catalog::display_label(&submission.acne_type).to_string();
    let date = format_date(submission.created_at);
    let acne_type = submission.acne_type.clone();

    rsx! {
        article {
            class: "submission-card",
            onclick: move |_| {
                nav.push(format!("/acne/{acne_type}"));
            },
            img {
                class: "submission-card__image",
                src: "{submission.image_url}",
                alt: "your scan",
                loading: "lazy",
            }
            div { class: "submission-card__text",
                span { class: "submission-card__type", "{label}" }
                span { class: "submission-card__date", "{date}" }
            }
        }
    }
}
