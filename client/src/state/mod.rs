//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `documents`, `transcript`, `ui`) so
//! components depend on small focused models.

pub mod chat;
pub mod documents;
pub mod transcript;
pub mod ui;
