//! Catalog of the classification categories.

use dioxus::prelude::*;

use api::catalog::ACNE_TYPES;

#[component]
pub fn AcneTypes() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "screen",
            header { class: "screen__header",
                h1 { class: "screen__title", "Acne types" }
                p { class: "screen__subtitle",
                    "Tap a type to see sample images and what worked for others."
                }
            }

            div { class: "type-list",
                for info in ACNE_TYPES {
                    article {
                        key: "{info.code}",
                        class: "type-card",
                        onclick: move |_| {
                            nav.push(format!("/acne/{}", info.code));
                        },
                        img {
                            class: "type-card__image",
                            src: "{info.sample_image_url}",
                            alt: "{info.label}",
                        }
                        div { class: "type-card__text",
                            h2 { class: "type-card__label", "{info.label}" }
                            p { class: "type-card__description", "{info.description}" }
                        }
                    }
                }
            }
        }
    }
}
