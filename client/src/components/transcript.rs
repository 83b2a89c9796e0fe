//! Scrollable message transcript with empty-state and thinking bubble.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use leptos::prelude::*;

use crate::state::chat::{ConversationState, THINKING_TEXT};
use crate::state::documents::Document;
use crate::state::transcript::Message;
use crate::util::scroll::scroll_into_view_smooth;

/// One rendered row of the transcript area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptRow {
    /// Empty-state prompt for the active document.
    Welcome(Document),
    Entry(Message),
    /// Transient in-flight bubble; never part of the transcript itself.
    Thinking,
}

/// Rows to render for `state`, in display order.
pub fn transcript_rows(state: &ConversationState) -> Vec<TranscriptRow> {
    let mut rows = Vec::with_capacity(state.transcript.len() + 1);
    if state.transcript.is_empty() {
        rows.push(TranscriptRow::Welcome(state.active_document));
    }
    rows.extend(state.transcript.messages().iter().cloned().map(TranscriptRow::Entry));
    if state.loading {
        rows.push(TranscriptRow::Thinking);
    }
    rows
}

pub fn welcome_prompt(document: Document) -> String {
    format!("Ask about {} regulations.", document.name())
}

/// Message list. Scrolls the newest entry into view whenever one is added.
#[component]
pub fn TranscriptView() -> impl IntoView {
    let chat = expect_context::<RwSignal<ConversationState>>();
    let bottom_ref = NodeRef::<leptos::html::Div>::new();

    // Memoized so typing into the draft does not re-render the list.
    let rows = Memo::new(move |_| chat.with(transcript_rows));
    let message_count = Memo::new(move |_| chat.with(|c| c.transcript.len()));

    Effect::new(move || {
        let _ = message_count.get();
        scroll_into_view_smooth(bottom_ref);
    });

    view! {
        <div class="message-list">
            {move || {
                rows.get()
                    .into_iter()
                    .map(|row| match row {
                        TranscriptRow::Welcome(document) => view! {
                            <div class="welcome">
                                "Hello! 👋"
                                <br/>
                                {welcome_prompt(document)}
                            </div>
                        }
                            .into_any(),
                        TranscriptRow::Entry(message) => {
                            let class = format!("message {}", message.role.as_str());
                            view! {
                                <div class=class>
                                    <div class="bubble">{message.text}</div>
                                </div>
                            }
                                .into_any()
                        }
                        TranscriptRow::Thinking => view! {
                            <div class="message bot">
                                <div class="bubble thinking">{THINKING_TEXT}</div>
                            </div>
                        }
                            .into_any(),
                    })
                    .collect::<Vec<_>>()
            }}
            <div class="message-list__bottom" node_ref=bottom_ref></div>
        </div>
    }
}
