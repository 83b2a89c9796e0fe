//! # dcr-widget
//!
//! Leptos + WASM chat widget for asking questions about the DNH, Gujarat and
//! Diu Development Control Regulations.
//!
//! The same bundle runs as the host page (portal mode, with a floating
//! launcher) and inside the launcher's iframe (widget mode, the chat surface
//! itself). This crate contains pages, components, conversation state, the
//! document catalog and the proxy HTTP client; the `server` crate links it
//! with the `ssr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A logger may already be installed; keep it.
    console_log::init_with_level(log::Level::Info).ok();
    leptos::mount::hydrate_body(app::App);
}
