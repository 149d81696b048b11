//! UI components for the portfolio.
//!
//! - `app_shell`: Navbar, Footer (contact), ScrollTopButton
//! - `sections`: Hero, About, Projects, Experiences
//! - `lab`: the three generative-AI demo widgets
//!
//! # Context Providers
//!
//! [`App`] provides shared state through Dioxus context:
//!
//! ```ignore
//! // The gateway used by the lab widgets
//! let gateway = use_gateway();
//! let image = gateway.generate_image(&prompt, size).await;
//!
//! // Active section and mobile menu
//! let nav = use_nav_state();
//! ```

mod app_shell;
mod lab;
mod sections;

pub use app_shell::{Footer, Navbar, ScrollTopButton};
pub use lab::{ImageStudio, KnowledgeSearch, Lab, VideoStudio};
pub use sections::{About, Experiences, Hero, Projects};

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use folio_core::navigation::{show_scroll_to_top, NavState, Section};
use folio_core::Gateway;

use crate::host::{build_gateway, gateway_config};
use crate::platform::{scroll_to_section, scroll_to_top, use_scroll_listener};
use crate::utils::SignalExt;

/// Gateway context provider
pub fn use_gateway() -> Gateway {
    use_context::<Gateway>()
}

/// Navigation state context provider
pub fn use_nav_state() -> Signal<NavState> {
    use_context::<Signal<NavState>>()
}

/// Root component: every section on one page plus the floating controls.
#[component]
pub fn App() -> Element {
    use_context_provider(|| build_gateway(gateway_config()));

    let mut nav = use_signal(NavState::default);
    use_context_provider(|| nav);

    let mut show_top = use_signal(|| false);
    use_scroll_listener(move |offset| {
        let visible = show_scroll_to_top(offset);
        // Only notify subscribers when visibility actually flips
        if *show_top.peek() != visible {
            show_top.set(visible);
        }
    });

    let navigate = move |section: Section| {
        debug!("Navigating to #{}", section.id());
        nav.mutate(|nav| nav.navigate(section));
        scroll_to_section(section.id());
    };

    rsx! {
        div { class: "fo-app",
            Navbar { nav_state: nav, on_navigate: navigate }

            main {
                Hero { on_navigate: navigate }
                About {}
                Projects {}
                Lab {}
                Experiences {}
            }

            section { id: Section::Contact.id(),
                Footer {}
            }

            if show_top() {
                ScrollTopButton { on_click: move |_| scroll_to_top() }
            }
        }
    }
}
