//! Host page: landing content and the floating chat launcher.

use leptos::portal::Portal;
use leptos::prelude::*;

use crate::components::launcher::Launcher;

/// Top-level landing page.
///
/// The `#root` mount element stays hidden outside a frame, so this tree is
/// mounted directly into `<body>`.
#[component]
pub fn PortalPage() -> impl IntoView {
    view! {
        <Portal>
            <div class="portal-container">
                <div class="hero">
                    <h1>"Development Control Regulations (DCR)"</h1>
                    <p>"Welcome to the official portal for DNH, Gujarat, and Diu regulations."</p>
                </div>
                <Launcher/>
            </div>
        </Portal>
    }
}
