//! Page modules, one per render mode.
//!
//! ARCHITECTURE
//! ============
//! `portal` is the top-level host page; `widget` is the framed chat surface.
//! Each page owns its layout and delegates rendering details to
//! `components`.

pub mod portal;
pub mod widget;
