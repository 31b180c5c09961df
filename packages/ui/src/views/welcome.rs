//! Landing screen: sign in, create an account, or browse as a guest.

use dioxus::prelude::*;

use crate::use_auth;

#[component]
pub fn Welcome() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in: straight to the feed
    if !auth().loading && auth().session.is_some() {
        nav.replace("/home");
    }

    rsx! {
        div { class: "welcome",
            h1 { class: "welcome__title", "Acnetify" }
            p { class: "welcome__tagline",
                "Snap a photo, learn your acne type, and see what helped people with the same skin."
            }

            div { class: "welcome__actions",
                button {
                    class: "btn btn--primary",
                    onclick: move |_| { nav.push("/signin"); },
                    "Sign in"
                }
                button {
                    class: "btn btn--outline",
                    onclick: move |_| { nav.push("/signup"); },
                    "Create account"
                }
                button {
                    class: "btn btn--ghost",
                    onclick: move |_| { nav.push("/home"); },
                    "Browse reviews as guest"
                }
            }
        }
    }
}
