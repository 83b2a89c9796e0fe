//! Built-in chat proxy: `POST /api/chat/{document_id}`.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a JSON body. Rejections carry an `error` string that the
//! widget renders verbatim as the bot reply, so these messages are written
//! for visitors. Internal causes are logged, not returned.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::{Extensions, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use dcr_widget::net::types::{QueryRequest, QueryResponse};
use dcr_widget::state::documents::Document;

use crate::state::AppState;

pub const UNKNOWN_DOCUMENT: &str = "Unknown document.";
pub const MESSAGE_REQUIRED: &str = "Message is required.";
pub const NOT_CONFIGURED: &str = "The assistant is not configured.";
pub const UPSTREAM_UNAVAILABLE: &str = "The assistant is unavailable right now.";

/// Forward a question about `document_id` to the chat backend.
pub async fn ask(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
    headers: HeaderMap,
    extensions: Extensions,
    body: Result<Json<QueryRequest>, JsonRejection>,
) -> Response {
    let Some(document) = Document::from_id(&document_id) else {
        return reject(StatusCode::NOT_FOUND, UNKNOWN_DOCUMENT);
    };
    let request = match body {
        Ok(Json(request)) if !request.message.trim().is_empty() => request,
        _ => return reject(StatusCode::BAD_REQUEST, MESSAGE_REQUIRED),
    };
    let Some(upstream) = state.upstream.as_ref() else {
        return reject(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED);
    };

    let client = client_key(&headers, extensions.get::<ConnectInfo<SocketAddr>>());
    if let Err(e) = state.rate_limiter.check_and_record(&client) {
        tracing::info!(%client, error = %e, "chat question rate limited");
        return reject(StatusCode::TOO_MANY_REQUESTS, &e.user_message());
    }

    match upstream.chat(document, &request).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            tracing::warn!(document = document.id(), error = %e, "upstream chat failed");
            reject(StatusCode::BAD_GATEWAY, UPSTREAM_UNAVAILABLE)
        }
    }
}

fn reject(status: StatusCode, message: &str) -> Response {
    (status, Json(QueryResponse::error(message))).into_response()
}

/// Rate-limit key: first `X-Forwarded-For` hop, else the peer address.
pub(crate) fn client_key(headers: &HeaderMap, peer: Option<&ConnectInfo<SocketAddr>>) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    match (forwarded, peer) {
        (Some(ip), _) => ip.to_owned(),
        (None, Some(ConnectInfo(addr))) => addr.ip().to_string(),
        (None, None) => "unknown".to_owned(),
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
