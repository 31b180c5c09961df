use dioxus::prelude::*;

use crate::icons::{FaCamera, FaClockRotateLeft, FaHouse, FaShapes, FaUser};
use crate::Icon;

/// Bottom tab bar shown under the main screens.
#[component]
pub fn BottomNav() -> Element {
    let nav = use_navigator();

    rsx! {
        nav { class: "bottom-nav",
            button {
                class: "bottom-nav__item",
                onclick: move |_| { nav.push("/home"); },
                Icon { icon: FaHouse, width: 18, height: 18 }
                span { "Home" }
            }
            button {
                class: "bottom-nav__item",
                onclick: move |_| { nav.push("/types"); },
                Icon { icon: FaShapes, width: 18, height: 18 }
                span { "Types" }
            }
            button {
                class: "bottom-nav__item bottom-nav__item--accent",
                onclick: move |_| { nav.push("/upload"); },
                Icon { icon: FaCamera, width: 18, height: 18 }
                span { "Scan" }
            }
            button {
                class: "bottom-nav__item",
                onclick: move |_| { nav.push("/history"); },
                Icon { icon: FaClockRotateLeft, width: 18, height: 18 }
                span { "History" }
            }
            button {
                class: "bottom-nav__item",
                onclick: move |_| { nav.push("/profile"); },
                Icon { icon: FaUser, width: 18, height: 18 }
                span { "Profile" }
            }
        }
    }
}
