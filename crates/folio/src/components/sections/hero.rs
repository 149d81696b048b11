use dioxus::prelude::*;
use folio_core::content::{OWNER_NAME, PROFILE_IMAGE_URL, TAGLINE};
use folio_core::navigation::Section;

/// Landing section with portrait, greeting and the contact call-to-action.
#[component]
pub fn Hero(on_navigate: EventHandler<Section>) -> Element {
    rsx! {
        section { id: Section::Home.id(), class: "fo-hero",
            div { class: "fo-container fo-hero-inner",
                div { class: "fo-hero-portrait",
                    div { class: "fo-hero-ring" }
                    img { class: "fo-hero-image", src: PROFILE_IMAGE_URL, alt: "Profile" }
                }
                div { class: "fo-hero-copy",
                    span { class: "fo-kicker", "Portfolio 2024" }
                    h1 { class: "fo-hero-title",
                        "Hi,"
                        br {}
                        " I am "
                        span { class: "fo-hero-name", "{OWNER_NAME}" }
                    }
                    p { class: "fo-hero-tagline", "{TAGLINE}" }
                    button {
                        class: "fo-btn fo-btn--primary",
                        onclick: move |_| on_navigate.call(Section::Contact),
                        "Download My Resume"
                    }
                }
            }
        }
    }
}
