use dioxus::prelude::*;
use folio_core::content::{CONTACT_EMAIL, SOCIAL_LINKS};

use crate::utils::current_year;

/// Contact block: email call-to-action, social links and copyright.
#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "fo-footer",
            div { class: "fo-container fo-footer-inner",
                h2 { class: "fo-footer-title", "Contact Me" }
                p { class: "fo-footer-lead",
                    "If you'd like to contact me, "
                    a { class: "fo-footer-mail", href: "mailto:{CONTACT_EMAIL}", "email me here" }
                    " or connect with me on LinkedIn."
                }

                div { class: "fo-social-row",
                    for link in SOCIAL_LINKS {
                        a { key: "{link.label}", class: "fo-social-pill", href: link.href, "{link.label}" }
                    }
                }

                div { class: "fo-footer-icons",
                    a { href: "#", title: "GitHub", "GitHub" }
                    a { href: "mailto:{CONTACT_EMAIL}", title: "Email", "Email" }
                }

                p { class: "fo-footer-copy", "© {year} Modern Portfolio. All rights reserved." }
            }
        }
    }
}
