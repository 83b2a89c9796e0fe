//! Networking modules for the chat proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the proxy call and maps its outcome to bot text; `types`
//! defines the wire schema shared with the server's built-in proxy.

pub mod api;
pub mod types;
