use dioxus::prelude::*;
use folio_core::navigation::{NavState, Section, NAV_ITEMS};

use crate::utils::SignalExt;

fn link_class(active: bool) -> &'static str {
    if active {
        "fo-nav-link fo-nav-link--active"
    } else {
        "fo-nav-link"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "fo-nav-mobile-link fo-nav-mobile-link--active"
    } else {
        "fo-nav-mobile-link"
    }
}

/// Fixed navigation bar with a desktop row and a mobile drop-down.
///
/// Picking an entry in either layout goes through `on_navigate`, which also
/// collapses the drop-down.
#[component]
pub fn Navbar(nav_state: Signal<NavState>, on_navigate: EventHandler<Section>) -> Element {
    let mut nav_state = nav_state;
    let state = nav_state();

    rsx! {
        nav { class: "fo-nav",
            div { class: "fo-nav-inner",
                button {
                    class: "fo-brand",
                    onclick: move |_| on_navigate.call(Section::Home),
                    span { class: "fo-brand-mark", "🚀" }
                    span { "PORTFOLIO." }
                }

                // Desktop row
                div { class: "fo-nav-links",
                    for section in NAV_ITEMS {
                        button {
                            key: "{section.id()}",
                            class: link_class(state.is_active(section)),
                            onclick: move |_| on_navigate.call(section),
                            "{section.label()}"
                        }
                    }
                    button {
                        class: "fo-btn fo-btn--pill",
                        onclick: move |_| on_navigate.call(Section::Contact),
                        "Contact"
                    }
                }

                button {
                    class: "fo-nav-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| nav_state.mutate(|nav| nav.toggle_menu()),
                    if state.menu_open {
                        "✕"
                    } else {
                        "☰"
                    }
                }
            }

            // Mobile drop-down
            if state.menu_open {
                div { class: "fo-nav-mobile",
                    for section in NAV_ITEMS {
                        button {
                            key: "{section.id()}",
                            class: mobile_link_class(state.is_active(section)),
                            onclick: move |_| on_navigate.call(section),
                            "{section.label()}"
                        }
                    }
                    button {
                        class: "fo-btn fo-btn--block",
                        onclick: move |_| on_navigate.call(Section::Contact),
                        "Contact Me"
                    }
                }
            }
        }
    }
}
