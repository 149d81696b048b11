use dioxus::prelude::*;
use folio_core::content::{ABOUT_PARAGRAPHS, ABOUT_QUOTE};
use folio_core::navigation::Section;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: Section::About.id(), class: "fo-section fo-section--light",
            div { class: "fo-container fo-narrow fo-center",
                h2 { class: "fo-section-title", "About" }
                div { class: "fo-prose",
                    for paragraph in ABOUT_PARAGRAPHS {
                        p { "{paragraph}" }
                    }
                    p { class: "fo-quote", "\"{ABOUT_QUOTE}\"" }
                }
            }
        }
    }
}
