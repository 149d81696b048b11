use dioxus::prelude::*;
use folio_core::content::{image_on_left, PROJECTS};
use folio_core::navigation::Section;
use folio_core::types::Project;

/// Alternating image/text rows, one per project.
#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: Section::Projects.id(), class: "fo-section",
            div { class: "fo-container",
                h2 { class: "fo-section-title fo-center", "Projects" }
                div { class: "fo-project-list",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        ProjectRow { key: "{project.id}", project: *project, image_left: image_on_left(index) }
                    }
                }
                div { class: "fo-center fo-project-more",
                    button { class: "fo-link-button", "View All Projects.." }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(project: Project, image_left: bool) -> Element {
    let row_class = if image_left {
        "fo-project"
    } else {
        "fo-project fo-project--reverse"
    };

    rsx! {
        article { class: row_class,
            div { class: "fo-project-media",
                div { class: "fo-project-shadow" }
                div { class: "fo-project-frame",
                    img { src: project.image_url, alt: project.title }
                }
            }
            div { class: "fo-project-body",
                h3 { class: "fo-project-title", "{project.title}" }
                p { class: "fo-project-text", "{project.description}" }
                div { class: "fo-tags",
                    for tag in project.tags {
                        span { key: "{tag}", class: "fo-tag", "{tag}" }
                    }
                }
                button { class: "fo-see-more", "See More ↗" }
            }
        }
    }
}
