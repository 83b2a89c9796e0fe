//! Floating launcher button and the popup frame it toggles.

use leptos::prelude::*;

use crate::state::ui::{PopupClick, UiState};
use crate::util::click_outside::on_page_click;

/// Launcher plus popup. The popup hosts an iframe of the app root, which
/// renders the chat surface because it is framed.
///
/// The frame is only mounted while open, so each reopen starts a fresh
/// conversation.
#[component]
pub fn Launcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let open = Signal::derive(move || ui.with(|u| u.popup_open));
    on_page_click(container_ref, open, move |inside| {
        ui.update(|u| u.handle_click(PopupClick::from_containment(inside)));
    });

    let on_launcher_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ui.update(|u| u.handle_click(PopupClick::Launcher));
    };

    view! {
        <div id="chat-widget-container" class="chat-widget" node_ref=container_ref>
            <button
                id="chat-launcher"
                class="chat-launcher"
                class:chat-launcher--open=move || open.get()
                on:click=on_launcher_click
            >
                {move || if open.get() { "✖" } else { "💬" }}
            </button>
            <Show when=move || open.get()>
                <div id="chat-window" class="chat-window">
                    <iframe src="/" title="chatbot-iframe" class="chat-window__frame"></iframe>
                </div>
            </Show>
        </div>
    }
}
