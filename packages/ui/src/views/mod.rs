mod welcome;
pub use welcome::Welcome;

mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;

mod home;
pub use home::Home;

mod acne_types;
pub use acne_types::AcneTypes;

mod acne_detail;
pub use acne_detail::AcneDetail;

mod history;
pub use history::History;

mod upload;
pub use upload::Upload;

mod profile;
pub use profile::Profile;

use dioxus::prelude::*;

/// Shown on screens that need a session when there is none.
#[component]
pub(crate) fn SignInPrompt(message: String) -> Element {
    let nav = use_navigator();
    rsx! {
        div { class: "empty-state",
            p { class: "empty-state__message", "{message}" }
            button {
                class: "btn btn--primary",
                onclick: move |_| { nav.push("/signin"); },
                "Sign in"
            }
        }
    }
}
