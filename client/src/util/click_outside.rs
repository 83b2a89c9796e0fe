//! Scoped page-click detection for a region.
//!
//! SYSTEM CONTEXT
//! ==============
//! The launcher popup closes when the visitor clicks anywhere outside its
//! container. Instead of a page-lifetime window listener, the listener is
//! attached only while the region is active and removed when it deactivates
//! or the owning component unmounts.

use leptos::html::Div;
use leptos::prelude::*;

/// While `active` is true, call `on_click` for every page click with whether
/// the click target lies inside `region`.
pub fn on_page_click<F>(region: NodeRef<Div>, active: Signal<bool>, on_click: F)
where
    F: Fn(bool) + Clone + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = StoredValue::new_local(None::<WindowListenerHandle>);
        let detach = move || {
            if let Some(listener) = handle.try_update_value(Option::take).flatten() {
                listener.remove();
            }
        };

        Effect::new(move || {
            let is_active = active.get();
            detach();
            if !is_active {
                return;
            }
            let on_click = on_click.clone();
            let listener = window_event_listener(leptos::ev::click, move |ev| {
                let Some(el) = region.get_untracked() else {
                    return;
                };
                let inside = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .is_some_and(|node| el.contains(Some(&node)));
                on_click(inside);
            });
            handle.set_value(Some(listener));
        });

        on_cleanup(detach);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (region, active, on_click);
    }
}
