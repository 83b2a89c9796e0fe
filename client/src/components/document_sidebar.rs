//! Document selector sidebar.

use leptos::prelude::*;

use crate::state::chat::ConversationState;
use crate::state::documents::Document;

/// Lists the catalog; picking an entry resets the conversation to it.
#[component]
pub fn DocumentSidebar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ConversationState>>();

    view! {
        <div class="sidebar">
            <h2 class="logo">"DCR Assistant"</h2>
            <div class="nav-list">
                {Document::ALL
                    .into_iter()
                    .map(|document| {
                        view! {
                            <button
                                class="nav-item"
                                class:active=move || chat.with(|c| c.active_document == document)
                                on:click=move |_| chat.update(|c| c.select_document(document))
                            >
                                {document.name()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
