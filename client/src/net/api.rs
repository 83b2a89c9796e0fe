//! HTTP client for the chat proxy.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the backend reports itself unavailable since questions
//! are only ever asked from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures surface as `ApiError` to the backend seam,
//! then collapse into the fixed connection-error bubble in [`ask`]. The cause
//! is logged, never shown.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{CONNECTION_ERROR_TEXT, QueryRequest, QueryResponse};
use crate::state::chat::PendingQuery;
use crate::state::documents::Document;

const DEFAULT_PROXY_URL: &str = "https://anythingllm-proxy.onrender.com/api/chat";

/// Base URL of the chat proxy. Override at build time with `DCR_PROXY_URL`.
pub const PROXY_URL: &str = match option_env!("DCR_PROXY_URL") {
    Some(url) => url,
    None => DEFAULT_PROXY_URL,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Transport(String),
    /// A response arrived but its body was not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// No HTTP client in this build (server-side rendering).
    #[error("not available on server")]
    Unavailable,
}

/// Endpoint for questions about `document`.
pub fn chat_endpoint(base: &str, document: Document) -> String {
    format!("{}/{}", base.trim_end_matches('/'), document.id())
}

/// Anything that can answer a document-scoped query.
pub trait ChatBackend {
    fn query(
        &self,
        document: Document,
        request: &QueryRequest,
    ) -> impl Future<Output = Result<QueryResponse, ApiError>>;
}

/// The remote proxy at [`PROXY_URL`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ProxyBackend;

impl ChatBackend for ProxyBackend {
    async fn query(&self, document: Document, request: &QueryRequest) -> Result<QueryResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = chat_endpoint(PROXY_URL, document);
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            // Rejections (429, 400, ...) still carry a JSON `error` body.
            resp.json::<QueryResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (document, request);
            Err(ApiError::Unavailable)
        }
    }
}

/// Send `query` through `backend` and return the bot message text.
///
/// Never fails: every failure path ends in [`CONNECTION_ERROR_TEXT`].
pub async fn ask<B: ChatBackend>(backend: &B, query: &PendingQuery) -> String {
    let request = QueryRequest::query(query.message.clone());
    match backend.query(query.document, &request).await {
        Ok(response) => response.into_reply_text(),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("chat request for {} failed: {e}", query.document.id());
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            CONNECTION_ERROR_TEXT.to_owned()
        }
    }
}
