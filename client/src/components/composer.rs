//! Input row: text field plus send button.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::{ProxyBackend, ask};
use crate::state::chat::{ConversationState, PendingQuery};

/// Whether a keydown with `key` submits the draft.
#[must_use]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Submit the current draft. Shared by Enter and the send button.
pub fn submit_draft(chat: &mut ConversationState) -> Option<PendingQuery> {
    let text = chat.draft.clone();
    chat.begin_submit(text)
}

/// Question input. Enter and the send button both submit the draft.
#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ConversationState>>();

    let submit = move || {
        let Some(query) = chat.try_update(submit_draft).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let reply = ask(&ProxyBackend, &query).await;
            chat.update(|c| c.finish(reply));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            submit();
        }
    };

    let loading = move || chat.with(|c| c.loading);

    view! {
        <div class="input-area">
            <input
                type="text"
                placeholder="Type your query..."
                prop:value=move || chat.with(|c| c.draft.clone())
                on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="send-btn" on:click=move |_| submit() disabled=loading>
                {move || if loading() { "..." } else { "Send" }}
            </button>
        </div>
    }
}
