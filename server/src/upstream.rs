//! Chat backend the built-in proxy forwards questions to.
//!
//! DESIGN
//! ======
//! The backend speaks the AnythingLLM workspace chat API:
//! `POST {base}/api/v1/workspace/{slug}/chat` with a bearer key and the same
//! `{message, mode}` body the widget sends. Its JSON reply already carries
//! `textResponse` (and `error` on failure), so it is passed through untouched.
//! `ChatUpstream` is the seam tests replace with a mock.

use std::time::Duration;

use dcr_widget::net::types::QueryRequest;
use dcr_widget::state::documents::Document;
use serde_json::Value;

use crate::config::{UpstreamConfig, Workspaces};

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the backend failed.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("upstream response error: status {status}")]
    Response { status: u16, body: String },

    /// The backend response body was not JSON.
    #[error("upstream response parse failed: {0}")]
    Parse(String),
}

#[async_trait::async_trait]
pub trait ChatUpstream: Send + Sync {
    /// Ask `request` against the workspace backing `document`.
    async fn chat(&self, document: Document, request: &QueryRequest) -> Result<Value, UpstreamError>;
}

pub struct AnythingLlmClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    workspaces: Workspaces,
}

impl AnythingLlmClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, api_key: config.api_key, workspaces: config.workspaces })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl ChatUpstream for AnythingLlmClient {
    async fn chat(&self, document: Document, request: &QueryRequest) -> Result<Value, UpstreamError> {
        let url = workspace_chat_url(&self.base_url, self.workspaces.slug(document));
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(UpstreamError::Response { status, body: text });
        }
        parse_chat_response(&text)
    }
}

pub(crate) fn workspace_chat_url(base_url: &str, slug: &str) -> String {
    format!("{}/api/v1/workspace/{slug}/chat", base_url.trim_end_matches('/'))
}

pub(crate) fn parse_chat_response(text: &str) -> Result<Value, UpstreamError> {
    let value: Value = serde_json::from_str(text).map_err(|e| UpstreamError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(UpstreamError::Parse("expected a JSON object".to_owned()));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
