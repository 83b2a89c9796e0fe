//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portal launcher and the chat surface while
//! reading/writing shared state from Leptos context providers.

pub mod chat_header;
pub mod composer;
pub mod document_sidebar;
pub mod launcher;
pub mod transcript;
