use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use folio_core::encoding::{data_uri_from_base64, file_to_base64, guess_mime_type};
use folio_core::{AspectRatio, SourceImage, WidgetState};

use super::WidgetHeader;
use crate::components::use_gateway;
use crate::utils::SignalExt;

const DEFAULT_PROMPT: &str = "A cinematic shot with subtle motion";

/// An uploaded still: the payload sent to the service and its preview.
#[derive(Debug, Clone, PartialEq)]
struct PickedImage {
    source: SourceImage,
    preview: String,
}

fn ratio_class(active: bool) -> &'static str {
    if active {
        "fo-chip fo-chip--active"
    } else {
        "fo-chip"
    }
}

/// Still image + optional prompt + aspect ratio -> short generated video.
#[component]
pub fn VideoStudio() -> Element {
    let gateway = use_gateway();
    let mut prompt = use_signal(|| DEFAULT_PROMPT.to_string());
    let mut picked = use_signal(|| None::<PickedImage>);
    let mut upload_error = use_signal(|| None::<String>);
    let mut aspect = use_signal(AspectRatio::default);
    let mut state = use_signal(|| WidgetState::<String>::new("Failed to generate video"));

    let snapshot = state.read().clone();
    let can_submit = snapshot.can_submit(picked.read().is_some());

    let handle_file = move |evt: FormEvent| {
        spawn(async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };

            let file_name = file.name().to_string();
            let mime_type = guess_mime_type(&file_name);
            let read = async move { file.read_bytes().await.map(|bytes| bytes.to_vec()) };

            match file_to_base64(read, mime_type).await {
                Ok(data) => {
                    info!("📎 Selected {} ({})", file_name, mime_type);
                    picked.set(Some(PickedImage {
                        preview: data_uri_from_base64(mime_type, &data),
                        source: SourceImage {
                            data,
                            mime_type: mime_type.to_string(),
                        },
                    }));
                    upload_error.set(None);
                    // A new still hides the previous video; a call in flight still finishes
                    state.mutate(|s| s.clear_result());
                }
                Err(e) => {
                    error!("Failed to read {}: {}", file_name, e);
                    upload_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let handle_generate = move |_| {
        let Some(image) = picked.read().as_ref().map(|p| p.source.clone()) else {
            return;
        };
        let Some(ticket) = state.try_mutate(|s| s.begin()) else {
            return;
        };

        let gateway = gateway.clone();
        let text = prompt.read().clone();
        let ratio = aspect();
        spawn(async move {
            let outcome = gateway.generate_video(&text, &image, ratio).await;
            match &outcome {
                Ok(_) => info!("✅ Video generated"),
                Err(e) => error!("❌ Video generation failed: {}", e),
            }
            state.mutate(|s| s.settle(ticket, outcome));
        });
    };

    let preview = picked.read().as_ref().map(|p| p.preview.clone());

    rsx! {
        div { class: "fo-widget fo-widget--wide",
            WidgetHeader {
                icon: "🎬",
                accent: "purple",
                title: "Veo Video Generator",
                subtitle: "Bring images to life with Veo 3.1",
            }

            div { class: "fo-video-grid",
                div { class: "fo-widget-body",
                    div {
                        span { class: "fo-label", "Source Image" }
                        label { class: "fo-dropzone",
                            input {
                                class: "fo-hidden-input",
                                r#type: "file",
                                accept: "image/jpeg, image/png",
                                onchange: handle_file,
                            }
                            if let Some(url) = preview.as_deref() {
                                img { class: "fo-dropzone-preview", src: "{url}", alt: "Preview" }
                            } else {
                                div { class: "fo-dropzone-empty",
                                    span { class: "fo-dropzone-icon", "⬆" }
                                    span { "Click to upload an image" }
                                }
                            }
                        }
                        if let Some(message) = upload_error() {
                            p { class: "fo-error", "{message}" }
                        }
                    }

                    div {
                        span { class: "fo-label", "Prompt (Optional)" }
                        input {
                            class: "fo-input",
                            r#type: "text",
                            placeholder: "Describe the motion...",
                            value: "{prompt}",
                            oninput: move |evt| prompt.set(evt.value()),
                        }
                    }

                    div {
                        span { class: "fo-label", "Aspect Ratio" }
                        div { class: "fo-chip-row",
                            for ratio in AspectRatio::ALL {
                                button {
                                    key: "{ratio.as_str()}",
                                    class: ratio_class(ratio == aspect()),
                                    onclick: move |_| aspect.set(ratio),
                                    "{ratio.label()}"
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
                            "Generating (takes ~1-2 min)..."
                        } else {
                            "▶ Generate Video"
                        }
                    }

                    if let Some(message) = snapshot.error() {
                        p { class: "fo-error", "{message}" }
                    }
                }

                div { class: "fo-stage",
                    if let Some(url) = snapshot.result() {
                        video {
                            class: "fo-stage-media fo-stage-video",
                            src: "{url}",
                            controls: true,
                            autoplay: true,
                            r#loop: true,
                        }
                    } else if snapshot.is_pending() {
                        div { class: "fo-stage-empty",
                            span { class: "fo-spinner fo-spinner--large" }
                            p { "AI is dreaming up your video..." }
                        }
                    } else {
                        div { class: "fo-stage-empty",
                            p { "Generated video will appear here." }
                        }
                    }
                }
            }
        }
    }
}
