//! Conversation controller state for the embedded chat surface.
//!
//! DESIGN
//! ======
//! All mutation is expressed as plain methods on `ConversationState` so the
//! submit/select rules can be tested without a reactive runtime. Components
//! wrap the state in an `RwSignal` and call these methods from event
//! handlers; the network round trip lives in `net::api::ask`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::documents::Document;
use super::transcript::{Message, Transcript};

/// Bubble text shown while a request is in flight.
pub const THINKING_TEXT: &str = "Analyzing PDF...";

/// State for the chat panel of one embedded frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationState {
    pub transcript: Transcript,
    pub active_document: Document,
    /// Current contents of the input field.
    pub draft: String,
    /// A request is in flight.
    pub loading: bool,
    pub sidebar_open: bool,
}

/// A submitted question waiting for its reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingQuery {
    pub document: Document,
    pub message: String,
}

impl ConversationState {
    /// Make `document` active, drop the transcript and close the sidebar.
    ///
    /// Re-selecting the active document clears too.
    pub fn select_document(&mut self, document: Document) {
        self.active_document = document;
        self.transcript = Transcript::default();
        self.sidebar_open = false;
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Whether `text` would be accepted by [`Self::begin_submit`].
    #[must_use]
    pub fn can_submit(&self, text: &str) -> bool {
        !self.loading && !text.trim().is_empty()
    }

    /// Start a submit of `text`.
    ///
    /// Returns `None` without touching state when `text` is blank or a
    /// request is already in flight. Otherwise appends the untrimmed text as
    /// a user message, clears the draft, marks the conversation as loading
    /// and returns the query to send.
    pub fn begin_submit(&mut self, text: String) -> Option<PendingQuery> {
        if !self.can_submit(&text) {
            return None;
        }
        self.transcript = std::mem::take(&mut self.transcript).with(Message::user(text.clone()));
        self.draft.clear();
        self.loading = true;
        Some(PendingQuery { document: self.active_document, message: text })
    }

    /// Settle an in-flight query: append the bot `reply` to the current
    /// transcript and clear the in-flight flag.
    ///
    /// The reply lands in whatever transcript is current, even if the
    /// document changed while the request was out.
    pub fn finish(&mut self, reply: String) {
        self.transcript = std::mem::take(&mut self.transcript).with(Message::bot(reply));
        self.loading = false;
    }
}
