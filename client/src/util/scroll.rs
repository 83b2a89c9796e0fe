//! Smooth scrolling helpers.

use leptos::html::Div;
use leptos::prelude::*;

/// Scroll `target` into view with smooth behavior on the next frame, after
/// pending DOM updates have been applied.
pub fn scroll_into_view_smooth(target: NodeRef<Div>) {
    #[cfg(feature = "hydrate")]
    {
        request_animation_frame(move || {
            let Some(el) = target.get_untracked() else {
                return;
            };
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            opts.set_block(web_sys::ScrollLogicalPosition::End);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}
