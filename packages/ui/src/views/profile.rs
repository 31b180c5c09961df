//! Session info and logout.

use dioxus::prelude::*;

use crate::views::SignInPrompt;
use crate::{use_auth, LogoutButton};

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "screen__loading", span { class: "spinner" } }
        };
    }

    let Some(session) = state.session else {
        return rsx! {
            div { class: "screen",
                header { class: "screen__header",
                    h1 { class: "screen__title", "Profile" }
                }
                SignInPrompt { message: "Sign in to see your profile." }
            }
        };
    };

    let initial = session
        .username
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    rsx! {
        div { class: "screen",
            header { class: "screen__header",
                h1 { class: "screen__title", "Profile" }
            }

            div { class: "profile-card",
                div { class: "profile-card__avatar", "{initial}" }
                div { class: "profile-card__text",
                    span { class: "profile-card__name", "{session.username}" }
                    span { class: "profile-card__id", "ID: {session.user_id}" }
                }
            }

            div { class: "profile-actions",
                button {
                    class: "btn btn--outline",
                    onclick: move |_| { nav.push("/history"); },
                    "My scan history"
                }
                LogoutButton { class: "btn btn--danger" }
            }
        }
    }
}
