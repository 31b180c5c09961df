//! One acne type: description, sample images, and its review feed
//! (most upvoted first).

use dioxus::prelude::*;

use api::{catalog, AcneImage, FetchState, LoadState};

use crate::{use_auth, use_pager, LoadStateFooter, NewReviewDialog, ReviewCard};

#[component]
pub fn AcneDetail(acne_type: String) -> Element {
    let auth = use_auth();
    let mut show_dialog = use_signal(|| false);

    let pager = {
        let acne_type = acne_type.clone();
        use_pager(move || crate::repo::reviews_repository().reviews_by_type(&acne_type))
    };

    let images = {
        let acne_type = acne_type.clone();
        use_resource(move || {
            let acne_type = acne_type.clone();
            async move {
                match crate::repo::image_repository().images_by_type(&acne_type).await {
                    Ok(images) => FetchState::Success(images),
                    Err(err) => FetchState::Error(err),
                }
            }
        })
    };

    let info = catalog::find(&acne_type);
    let label = catalog::display_label(&acne_type).to_string();
    let refresh_state = pager.refresh_state();
    let signed_in = auth().session.is_some();

    rsx! {
        div { class: "screen",
            header { class: "screen__header",
                h1 { class: "screen__title", "{label}" }
                if let Some(info) = info {
                    p { class: "screen__subtitle", "{info.description}" }
                }
            }

            section { class: "detail-images",
                h2 { class: "section-title", "Classified images" }
                {match images() {
                    None | Some(FetchState::Loading) => rsx! {
                        div { class: "screen__loading", span { class: "spinner" } }
                    },
                    Some(FetchState::Error(err)) => rsx! {
                        p { class: "form-error", "{err.message()}" }
                    },
                    Some(FetchState::Success(images)) => {
                        if images.is_empty() {
                            rsx! {
                                p { class: "detail-images__empty", "No images classified as {label} yet." }
                            }
                        } else {
                            rsx! {
                                div { class: "detail-images__row",
                                    for image in images.iter() {
                                        SampleImage { key: "{image.id}", image: image.clone() }
                                    }
                                }
                            }
                        }
                    }
                }}
            }

            section { class: "detail-reviews",
                div { class: "section-row",
                    h2 { class: "section-title", "Most helpful reviews" }
                    if signed_in {
                        button {
                            class: "btn btn--outline",
                            onclick: move |_| show_dialog.set(true),
                            "Write a review"
                        }
                    }
                }

                if show_dialog() {
                    NewReviewDialog {
                        default_acne_type: Some(acne_type.clone()),
                        on_created: move |_| {
                            show_dialog.set(false);
                            pager.refresh();
                        },
                        on_cancel: move |_| show_dialog.set(false),
                    }
                }

                {match refresh_state {
                    LoadState::Loading if pager.items().is_empty() => rsx! {
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
                            for review in pager.items() {
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
            }
        }
    }
}

#[component]
fn SampleImage(image: AcneImage) -> Element {
    rsx! {
        img {
            class: "detail-images__item",
            src: "{image.image_url}",
            alt: "classified sample",
            loading: "lazy",
        }
    }
}
