//! Root application component, render-mode switch and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{portal::PortalPage, widget::WidgetPage};
use crate::state::{chat::ConversationState, ui::RenderMode, ui::UiState};
use crate::util::embed::{self, ROOT_ID};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and serves the single route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ConversationState::default());

    provide_context(ui);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/dcr-widget.css"/>
        <Title text="DCR Assistant"/>

        <div id=ROOT_ID>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ChatWidget/>
                </Routes>
            </Router>
        </div>
    }
}

/// Resolves the render mode once in the browser, then renders the matching
/// page. Nothing is rendered during SSR since the mode is unknown there.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // No tracked reads: runs once, after hydration.
    Effect::new(move || {
        let mode = embed::detect_render_mode();
        if mode.is_embedded() {
            embed::reveal_root();
        }
        ui.update(|u| u.mode = Some(mode));
    });

    move || match ui.with(|u| u.mode) {
        None => ().into_any(),
        Some(RenderMode::Portal) => view! { <PortalPage/> }.into_any(),
        Some(RenderMode::Widget) => view! { <WidgetPage/> }.into_any(),
    }
}
