use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use folio_core::{ImageSize, WidgetState};

use super::WidgetHeader;
use crate::components::use_gateway;
use crate::utils::SignalExt;

const DEFAULT_PROMPT: &str = "A futuristic city made of crystal and light, photorealistic, 8k";

/// Prompt + resolution tier -> generated image.
#[component]
pub fn ImageStudio() -> Element {
    let gateway = use_gateway();
    let mut prompt = use_signal(|| DEFAULT_PROMPT.to_string());
    let mut size = use_signal(ImageSize::default);
    let mut state = use_signal(|| WidgetState::<String>::new("Failed to generate image"));

    let snapshot = state.read().clone();
    let can_submit = snapshot.can_submit(!prompt.read().trim().is_empty());

    let handle_generate = move |_| {
        let text = prompt.read().clone();
        if text.trim().is_empty() {
            return;
        }
        let Some(ticket) = state.try_mutate(|s| s.begin()) else {
            return;
        };

        let gateway = gateway.clone();
        let size = size();
        spawn(async move {
            let outcome = gateway.generate_image(&text, size).await;
            match &outcome {
                Ok(_) => info!("✅ Image generated"),
                Err(e) => error!("❌ Image generation failed: {}", e),
            }
            state.mutate(|s| s.settle(ticket, outcome));
        });
    };

    rsx! {
        div { class: "fo-widget",
            WidgetHeader {
                icon: "🖼",
                accent: "blue",
                title: "Pro Image Studio",
                subtitle: "High-fidelity generation with Gemini 3 Pro",
            }

            div { class: "fo-widget-body",
                div { class: "fo-field-row",
                    input {
                        class: "fo-input",
                        r#type: "text",
                        placeholder: "Describe your imagination...",
                        value: "{prompt}",
                        oninput: move |evt| prompt.set(evt.value()),
                    }
                    select {
                        class: "fo-select",
                        value: "{size().as_str()}",
                        onchange: move |evt: FormEvent| {
                            if let Some(tier) = ImageSize::parse(&evt.value()) {
                                size.set(tier);
                            }
                        },
                        for tier in ImageSize::ALL {
                            option {
                                key: "{tier.as_str()}",
                                value: tier.as_str(),
                                selected: tier == size(),
                                "{tier.label()}"
                            }
                        }
                    }
                }

                button {
                    class: "fo-btn fo-btn--primary fo-btn--block",
                    disabled: !can_submit,
                    onclick: handle_generate,
                    if snapshot.is_pending() {
                        span { class: "fo-spinner" }
                        "Generating…"
                    } else {
                        "✨ Generate Masterpiece"
                    }
                }

                if let Some(message) = snapshot.error() {
                    p { class: "fo-error", "{message}" }
                }

                div { class: "fo-stage fo-stage--tall",
                    if let Some(url) = snapshot.result() {
                        img { class: "fo-stage-media", src: "{url}", alt: "Generated" }
                        a {
                            class: "fo-download",
                            href: "{url}",
                            download: "gemini-art.png",
                            title: "Download",
                            "⬇"
                        }
                    } else {
                        div { class: "fo-stage-empty",
                            if snapshot.is_pending() {
                                span { class: "fo-spinner fo-spinner--large" }
                            }
                            span { "Result will appear here" }
                        }
                    }
                }
            }
        }
    }
}
