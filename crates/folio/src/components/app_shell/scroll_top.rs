use dioxus::prelude::*;

/// Floating button that returns to the top of the page.
#[component]
pub fn ScrollTopButton(on_click: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "fo-scroll-top",
            aria_label: "Scroll to top",
            onclick: move |evt| on_click.call(evt),
            "↑"
        }
    }
}
