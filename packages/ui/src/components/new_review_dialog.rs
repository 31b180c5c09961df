use dioxus::prelude::*;

use api::{catalog::ACNE_TYPES, CreatedReview, FetchState};

/// Inline form for posting a new review.
#[component]
pub fn NewReviewDialog(
    default_acne_type: Option<String>,
    on_created: EventHandler<CreatedReview>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut acne_type = use_signal(move || {
        default_acne_type.unwrap_or_else(|| ACNE_TYPES[0].code.to_string())
    });
    let mut body = use_signal(String::new);
    let mut submit_state = use_signal(|| Option::<FetchState<CreatedReview>>::None);

    let handle_submit = move |_| {
        let text = body().trim().to_string();
        if text.is_empty() {
            return;
        }
        spawn(async move {
            submit_state.set(Some(FetchState::Loading));
            let repo = crate::repo::reviews_repository();
            match repo.create_review(&acne_type(), &text).await {
                Ok(created) => {
                    submit_state.set(None);
                    body.set(String::new());
                    on_created.call(created);
                }
                Err(err) => submit_state.set(Some(FetchState::Error(err))),
            }
        });
    };

    let submitting = matches!(submit_state(), Some(FetchState::Loading));

    rsx! {
        div { class: "dialog",
            h2 { class: "dialog__title", "Share your experience" }

            if let Some(FetchState::Error(err)) = submit_state() {
                div { class: "form-error", "{err.message()}" }
            }

            label { class: "dialog__label", r#for: "new-review-type", "Acne type" }
            select {
                id: "new-review-type",
                class: "dialog__select",
                value: acne_type(),
                onchange: move |evt| acne_type.set(evt.value()),
                for info in ACNE_TYPES {
                    option {
                        key: "{info.code}",
                        value: "{info.code}",
                        "{info.label}"
                    }
                }
            }

            label { class: "dialog__label", r#for: "new-review-body", "Your review" }
            textarea {
                id: "new-review-body",
                class: "dialog__textarea",
                rows: 5,
                placeholder: "What helped, what didn't...",
                value: body(),
                oninput: move |evt| body.set(evt.value()),
            }

            div { class: "dialog__actions",
                button {
                    class: "btn btn--primary",
                    disabled: submitting || body().trim().is_empty(),
                    onclick: handle_submit,
                    if submitting { "Posting..." } else { "Post review" }
                }
                button {
                    class: "btn btn--outline",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
