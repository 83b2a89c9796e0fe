use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;
use crate::state::test_helpers::{MockUpstream, test_app_state, test_app_state_with_upstream};

fn post(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .header("x-forwarded-for", "203.0.113.7")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = api_routes(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

const QUESTION: &str = r#"{"message":"What is FSI?","mode":"query"}"#;

// =============================================================
// Proxy outcomes
// =============================================================

#[tokio::test]
async fn answer_is_passed_through() {
    let upstream = MockUpstream::replying(json!({ "textResponse": "Answer A", "sources": [] }));
    let state = test_app_state_with_upstream(upstream.clone(), 10);

    let (status, body) = send(state, post("/api/chat/pdf2", QUESTION)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "textResponse": "Answer A", "sources": [] }));
    assert_eq!(upstream.calls(), vec![(Document::GujaratDcr, QueryRequest::query("What is FSI?"))]);
}

#[tokio::test]
async fn unknown_document_is_not_found() {
    let upstream = MockUpstream::replying(json!({}));
    let state = test_app_state_with_upstream(upstream.clone(), 10);

    let (status, body) = send(state, post("/api/chat/pdf9", QUESTION)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": UNKNOWN_DOCUMENT }));
    assert!(upstream.calls().is_empty());
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let (status, body) = send(test_app_state(), post("/api/chat/pdf1", r#"{"message":"   "}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": MESSAGE_REQUIRED }));
}

#[tokio::test]
async fn malformed_body_is_rejected_as_json() {
    let (status, body) = send(test_app_state(), post("/api/chat/pdf1", "not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": MESSAGE_REQUIRED }));
}

#[tokio::test]
async fn missing_upstream_is_unavailable() {
    let (status, body) = send(test_app_state(), post("/api/chat/pdf1", QUESTION)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": NOT_CONFIGURED }));
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let state = test_app_state_with_upstream(MockUpstream::failing(500), 10);
    let (status, body) = send(state, post("/api/chat/pdf3", QUESTION)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": UPSTREAM_UNAVAILABLE }));
}

#[tokio::test]
async fn rate_limited_client_gets_wait_message() {
    let upstream = MockUpstream::replying(json!({ "textResponse": "ok" }));
    let state = test_app_state_with_upstream(upstream.clone(), 1);

    let (first, _) = send(state.clone(), post("/api/chat/pdf1", QUESTION)).await;
    let (second, body) = send(state, post("/api/chat/pdf1", QUESTION)).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, json!({ "error": "Too many questions! Please wait 15 minutes." }));
    assert_eq!(upstream.calls().len(), 1);
}

#[tokio::test]
async fn healthz_is_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = api_routes(test_app_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================
// client_key
// =============================================================

#[test]
fn client_key_prefers_first_forwarded_hop() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(" 198.51.100.1 , 10.0.0.1"));
    let peer = ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000)));
    assert_eq!(client_key(&headers, Some(&peer)), "198.51.100.1");
}

#[test]
fn client_key_falls_back_to_peer_ip() {
    let peer = ConnectInfo(SocketAddr::from(([192, 0, 2, 5], 52000)));
    assert_eq!(client_key(&HeaderMap::new(), Some(&peer)), "192.0.2.5");
}

#[test]
fn client_key_without_any_source_is_unknown() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(""));
    assert_eq!(client_key(&headers, None), "unknown");
}
