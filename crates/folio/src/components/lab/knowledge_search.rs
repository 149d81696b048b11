use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use folio_core::config::SEARCH_APOLOGY_TEXT;
use folio_core::lifecycle::Ticket;
use folio_core::{GatewayError, SearchResult, WidgetState};
use futures::channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use instant::Instant;

use super::WidgetHeader;
use crate::components::use_gateway;
use crate::utils::SignalExt;

/// Question -> web-grounded answer with cited sources.
///
/// Searches run on a coroutine; failures come back as an apology answer
/// rather than an error, so the error slot is never shown.
#[component]
pub fn KnowledgeSearch() -> Element {
    let gateway = use_gateway();
    let mut query = use_signal(String::new);
    let mut state = use_signal(|| WidgetState::<SearchResult>::new(SEARCH_APOLOGY_TEXT));

    let search_task = use_coroutine(move |mut rx: UnboundedReceiver<(Ticket, String)>| {
        let gateway = gateway.clone();
        async move {
            while let Some((ticket, question)) = rx.next().await {
                let started = Instant::now();
                let result = gateway.search_or_apologize(&question).await;
                info!(
                    "🔍 Answered in {:.0}ms with {} sources",
                    started.elapsed().as_secs_f64() * 1000.0,
                    result.sources.len()
                );
                state.mutate(|s| s.settle(ticket, Ok::<_, GatewayError>(result)));
            }
        }
    });

    let mut submit = move || {
        let question = query.read().trim().to_string();
        if question.is_empty() {
            return;
        }
        if let Some(ticket) = state.try_mutate(|s| s.begin()) {
            search_task.send((ticket, question));
        }
    };

    let snapshot = state.read().clone();
    let can_submit = snapshot.can_submit(!query.read().trim().is_empty());

    rsx! {
        div { class: "fo-widget fo-widget--column",
            WidgetHeader {
                icon: "🌐",
                accent: "green",
                title: "Knowledge Search",
                subtitle: "Grounded in real-world data",
            }

            div { class: "fo-search-row",
                input {
                    class: "fo-input",
                    r#type: "text",
                    placeholder: "Ask me about current tech trends...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                    onkeypress: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "fo-btn fo-btn--primary",
                    disabled: !can_submit,
                    onclick: move |_| submit(),
                    if snapshot.is_pending() {
                        span { class: "fo-spinner" }
                    } else {
                        "→"
                    }
                }
            }

            div { class: "fo-answer",
                if let Some(result) = snapshot.result() {
                    div { class: "fo-answer-text", "{result.text}" }
                    if !result.sources.is_empty() {
                        div { class: "fo-sources",
                            h4 { class: "fo-sources-title", "Sources" }
                            for (idx, source) in result.sources.iter().enumerate() {
                                a {
                                    key: "{idx}",
                                    class: "fo-source",
                                    href: "{source.uri}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    span { class: "fo-source-title", "{source.title}" }
                                    span { class: "fo-source-icon", "↗" }
                                }
                            }
                        }
                    }
                } else if snapshot.is_pending() {
                    div { class: "fo-answer-empty",
                        span { class: "fo-spinner" }
                        "Searching…"
                    }
                } else {
                    div { class: "fo-answer-empty", "Results will appear here with source citations." }
                }
            }
        }
    }
}
