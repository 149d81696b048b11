use dioxus::prelude::*;
use folio_core::content::EXPERIENCES;
use folio_core::navigation::Section;

/// Vertical timeline of past roles.
#[component]
pub fn Experiences() -> Element {
    rsx! {
        section { id: Section::Experiences.id(), class: "fo-section fo-section--light",
            div { class: "fo-container",
                h2 { class: "fo-section-title fo-center", "Experiences" }
                div { class: "fo-timeline",
                    for exp in EXPERIENCES {
                        div { key: "{exp.id}", class: "fo-timeline-item",
                            div { class: "fo-timeline-dot" }
                            h3 { class: "fo-timeline-role", "{exp.role}" }
                            span { class: "fo-timeline-meta", "{exp.company} | {exp.period}" }
                            p { class: "fo-timeline-text", "{exp.description}" }
                        }
                    }
                }
            }
        }
    }
}
