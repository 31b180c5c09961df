use dioxus::prelude::*;

use api::{catalog, Review};

use crate::format::format_date;
use crate::icons::FaThumbsUp;
use crate::use_auth;
use crate::Icon;

/// One review in a feed.
///
/// The upvote toggle only calls the backend and flips the local `is_liked`
/// flag. The count is server-authoritative and stays whatever the last
/// listing reported — it refreshes with the next fetch, never client-side.
#[component]
pub fn ReviewCard(review: Review) -> Element {
    let auth = use_auth();
    let mut liked = use_signal(|| review.is_liked);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let review_id = review.id.clone();
    let toggle = move |_| {
        let review_id = review_id.clone();
        async move {
            if busy() {
                return;
            }
            busy.set(true);
            error.set(None);
            let repo = crate::repo::reviews_repository();
            let result = if liked() {
                repo.cancel_upvote(&review_id).await
            } else {
                repo.upvote(&review_id).await
            };
            match result {
                Ok(()) => liked.set(!liked()),
                Err(err) => error.set(Some(err.message().to_string())),
            }
            busy.set(false);
        }
    };

    let type_label = catalog::display_label(&review.acne_type).to_string();
    let date = format_date(review.created_at);
    let signed_in = auth().session.is_some();

    rsx! {
        article { class: "review-card",
            header { class: "review-card__meta",
                span { class: "review-card__author", "{review.username}" }
                span { class: "review-card__type", "{type_label}" }
                span { class: "review-card__date", "{date}" }
            }
            p { class: "review-card__body", "{review.body}" }
            footer { class: "review-card__actions",
                button {
                    class: if liked() { "upvote-btn upvote-btn--active" } else { "upvote-btn" },
                    disabled: busy() || !signed_in,
                    title: if signed_in { "Upvote" } else { "Sign in to upvote" },
                    onclick: toggle,
                    Icon { icon: FaThumbsUp, width: 14, height: 14 }
                    span { class: "upvote-btn__count", "{review.upvote}" }
                }
                if let Some(message) = error() {
                    span { class: "review-card__error", "{message}" }
                }
            }
        }
    }
}
