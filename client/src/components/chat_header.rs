//! Header bar: menu toggle and active document name.

use leptos::prelude::*;

use crate::state::chat::ConversationState;

#[component]
pub fn ChatHeader() -> impl IntoView {
    let chat = expect_context::<RwSignal<ConversationState>>();

    view! {
        <div class="chat-header">
            <button class="menu-toggle" on:click=move |_| chat.update(ConversationState::open_sidebar)>
                "☰ Menu"
            </button>
            <div>
                "Chatting with: "
                <strong>{move || chat.with(|c| c.active_document.name())}</strong>
            </div>
        </div>
    }
}
