//! Embedded chat surface rendered inside the launcher's frame.

use leptos::prelude::*;

use crate::components::chat_header::ChatHeader;
use crate::components::composer::Composer;
use crate::components::document_sidebar::DocumentSidebar;
use crate::components::transcript::TranscriptView;
use crate::state::chat::ConversationState;

#[component]
pub fn WidgetPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ConversationState>>();

    view! {
        <div class="app-container widget-mode" class:sidebar-open=move || chat.with(|c| c.sidebar_open)>
            <div class="sidebar-overlay" on:click=move |_| chat.update(ConversationState::close_sidebar)></div>
            <DocumentSidebar/>
            <div class="main-chat">
                <ChatHeader/>
                <TranscriptView/>
                <Composer/>
            </div>
        </div>
    }
}
