//! Photo upload: pick a file, send it for classification, show the verdict.

use dioxus::prelude::*;

use api::{catalog, FetchState};

use crate::views::SignInPrompt;
use crate::use_auth;

#[component]
pub fn Upload() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut picked = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut state = use_signal(|| Option::<FetchState<String>>::None);

    let auth_state = auth();
    if auth_state.loading {
        return rsx! {
            div { class: "screen__loading", span { class: "spinner" } }
        };
    }
    if auth_state.session.is_none() {
        return rsx! {
            div { class: "screen",
                header { class: "screen__header",
                    h1 { class: "screen__title", "Scan your skin" }
                }
                SignInPrompt { message: "Sign in to upload a photo for classification." }
            }
        };
    }

    let pick_file = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            spawn(async move {
                let names = file_engine.files();
                let Some(name) = names.first().cloned() else {
                    return;
                };
                if let Some(bytes) = file_engine.read_file(&name).await {
                    tracing::debug!(name, size = bytes.len(), "picked image");
                    picked.set(Some((name, bytes)));
                    state.set(None);
                }
            });
        }
    };

    let submit = move |_| {
        let Some((name, bytes)) = picked() else {
            return;
        };
        spawn(async move {
            state.set(Some(FetchState::Loading));
            let result = crate::repo::image_repository().upload(&name, bytes).await;
            state.set(Some(result.into()));
        });
    };

    let uploading = matches!(state(), Some(FetchState::Loading));

    rsx! {
        div { class: "screen",
            header { class: "screen__header",
                h1 { class: "screen__title", "Scan your skin" }
                p { class: "screen__subtitle",
                    "Upload a clear, well-lit photo of the affected area. Classification runs on the server."
                }
            }

            div { class: "upload-form",
                input {
                    class: "upload-form__file",
                    r#type: "file",
                    accept: "image/jpeg,image/png",
                    onchange: pick_file,
                }

                if let Some(picked_label) = picked().map(|(name, bytes)| format!("{name} ({} bytes)", bytes.len())) {
                    p { class: "upload-form__picked", "{picked_label}" }
                }

                button {
                    class: "btn btn--primary",
                    disabled: picked().is_none() || uploading,
                    onclick: submit,
                    if uploading { "Classifying..." } else { "Upload & classify" }
                }
            }

            {match state() {
                Some(FetchState::Success(code)) => {
                    let label = catalog::display_label(&code).to_string();
                    let route = format!("/acne/{code}");
                    rsx! {
                        div { class: "upload-result",
                            h2 { class: "upload-result__title", "Classification complete" }
                            p { class: "upload-result__message",
                                "Acne successfully predicted is {label}"
                            }
                            div { class: "upload-result__actions",
                                button {
                                    class: "btn btn--primary",
                                    onclick: move |_| { nav.push(route.clone()); },
                                    "See {label} reviews"
                                }
                                button {
                                    class: "btn btn--outline",
                                    onclick: move |_| {
                                        picked.set(None);
                                        state.set(None);
                                    },
                                    "Scan another"
                                }
                            }
                        }
                    }
                }
                Some(FetchState::Error(err)) => rsx! {
                    div { class: "upload-result upload-result--error",
                        h2 { class: "upload-result__title", "Upload failed" }
                        p { class: "form-error", "{err.message()}" }
                    }
                },
                _ => rsx! {},
            }}
        }
    }
}
