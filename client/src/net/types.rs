//! Wire types for the chat proxy.
//!
//! Shared by the widget (which sends `QueryRequest` and reads
//! `QueryResponse`) and the server's built-in proxy (which does the reverse).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Bot text when the backend answered with neither an error nor an answer.
pub const NO_ANSWER_TEXT: &str = "No answer found.";

/// Bot text when no usable response was obtained.
pub const CONNECTION_ERROR_TEXT: &str = "Connection error.";

/// Retrieval mode requested from the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// Answer strictly from the workspace documents.
    #[default]
    Query,
    /// Conversational mode with general knowledge fallback.
    Chat,
}

/// Body of `POST {proxy}/{documentId}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub message: String,
    #[serde(default)]
    pub mode: ChatMode,
}

impl QueryRequest {
    /// A document-scoped query for `message`.
    pub fn query(message: impl Into<String>) -> Self {
        Self { message: message.into(), mode: ChatMode::Query }
    }
}

/// Proxy response. Unknown fields (sources, ids, ...) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "textResponse", default, skip_serializing_if = "Option::is_none")]
    pub text_response: Option<String>,
}

impl QueryResponse {
    /// An error-only response, as the proxy sends on rejection.
    pub fn error(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()), text_response: None }
    }

    /// Text to show as the bot message.
    ///
    /// A backend error wins over an answer; empty strings count as absent.
    #[must_use]
    pub fn into_reply_text(self) -> String {
        let non_empty = |s: &String| !s.is_empty();
        self.error
            .filter(non_empty)
            .or_else(|| self.text_response.filter(non_empty))
            .unwrap_or_else(|| NO_ANSWER_TEXT.to_owned())
    }
}
