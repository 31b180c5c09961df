use dioxus::prelude::*;

use ui::views::{AcneDetail, AcneTypes, History, Home, Profile, SignIn, SignUp, Upload, Welcome};
use ui::{AuthProvider, BottomNav};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/welcome")]
    Welcome {},
    #[route("/signin")]
    SignIn {},
    #[route("/signup")]
    SignUp {},
    #[layout(TabShell)]
        #[route("/home")]
        Home {},
        #[route("/types")]
        AcneTypes {},
        #[route("/acne/:acne_type")]
        AcneDetail { acne_type: String },
        #[route("/history")]
        History {},
        #[route("/upload")]
        Upload {},
        #[route("/profile")]
        Profile {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// `/` lands on the feed when a session exists, the welcome screen otherwise.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Hold until the persisted session has been read
    if auth().loading {
        return rsx! {};
    }
    if auth().session.is_some() {
        nav.replace(Route::Home {});
    } else {
        nav.replace(Route::Welcome {});
    }
    rsx! {}
}

/// Main screens share the bottom tab bar.
#[component]
fn TabShell() -> Element {
    rsx! {
        div { class: "app-shell",
            main { class: "app-shell__content",
                Outlet::<Route> {}
            }
            BottomNav {}
        }
    }
}
