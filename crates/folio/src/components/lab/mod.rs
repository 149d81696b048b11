//! The lab: live demos of the generative-AI gateway.
//!
//! Each widget owns its inputs and a `WidgetState` (idle, pending, result or
//! error) and talks to the gateway from [`use_gateway`](super::use_gateway).
//! Widgets are independent; one can be pending while another is idle.

mod image_studio;
mod knowledge_search;
mod video_studio;

pub use image_studio::ImageStudio;
pub use knowledge_search::KnowledgeSearch;
pub use video_studio::VideoStudio;

use dioxus::prelude::*;
use folio_core::navigation::Section;

#[component]
pub fn Lab() -> Element {
    rsx! {
        section { id: Section::Lab.id(), class: "fo-section fo-lab",
            div { class: "fo-container",
                h2 { class: "fo-section-title fo-center", "Lab" }
                p { class: "fo-section-lead fo-center",
                    "Experiments with generative AI: images, video and grounded search."
                }
                div { class: "fo-lab-grid",
                    ImageStudio {}
                    KnowledgeSearch {}
                }
                VideoStudio {}
            }
        }
    }
}

/// Card header shared by the lab widgets.
#[component]
fn WidgetHeader(icon: &'static str, accent: &'static str, title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div { class: "fo-widget-header",
            div { class: "fo-widget-icon fo-widget-icon--{accent}", "{icon}" }
            div {
                h3 { class: "fo-widget-title", "{title}" }
                p { class: "fo-widget-subtitle", "{subtitle}" }
            }
        }
    }
}
