//! Render-mode detection: top-level page or framed widget.
//!
//! The same bundle is loaded both as the host page and inside the launcher's
//! iframe. Whether this window is the top window is the only signal; there is
//! no query parameter. Requires a browser environment.

#[cfg(test)]
#[path = "embed_test.rs"]
mod embed_test;

use crate::state::ui::RenderMode;

/// Id of the element the app mounts into.
pub const ROOT_ID: &str = "root";

/// What `window.top` turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopWindow {
    /// `top` is this window.
    Same,
    /// `top` is some other window.
    Other,
    /// Reading `top` threw.
    Denied,
    /// Detached window without a `top`.
    Missing,
}

impl TopWindow {
    #[must_use]
    pub const fn is_framed(self) -> bool {
        matches!(self, Self::Other | Self::Denied)
    }
}

/// Decide the render mode for this window. Always `Portal` off-browser.
pub fn detect_render_mode() -> RenderMode {
    #[cfg(feature = "hydrate")]
    {
        RenderMode::from_embedded(top_window().is_framed())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        RenderMode::Portal
    }
}

#[cfg(feature = "hydrate")]
fn top_window() -> TopWindow {
    let Some(window) = web_sys::window() else {
        return TopWindow::Missing;
    };
    match window.top() {
        Ok(Some(top)) if js_sys::Object::is(window.as_ref(), top.as_ref()) => TopWindow::Same,
        Ok(Some(_)) => TopWindow::Other,
        Ok(None) => TopWindow::Missing,
        Err(_) => TopWindow::Denied,
    }
}

/// Make the `#root` mount element visible. It is hidden by default styling.
pub fn reveal_root() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(ROOT_ID))
        else {
            log::warn!("no #{ROOT_ID} element to reveal");
            return;
        };
        if let Ok(el) = root.dyn_into::<web_sys::HtmlElement>() {
            let _ = el.style().set_property("display", "block");
        }
    }
}
