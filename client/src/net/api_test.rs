use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::types::NO_ANSWER_TEXT;
use crate::state::chat::{ConversationState, THINKING_TEXT};
use crate::state::transcript::Message;

/// Backend that replays a canned result and records what it was asked.
struct MockBackend {
    result: RefCell<Option<Result<QueryResponse, ApiError>>>,
    calls: RefCell<Vec<(Document, QueryRequest)>>,
}

impl MockBackend {
    fn answering(json: &str) -> Self {
        let response = serde_json::from_str(json).unwrap();
        Self { result: RefCell::new(Some(Ok(response))), calls: RefCell::new(Vec::new()) }
    }

    fn failing(err: ApiError) -> Self {
        Self { result: RefCell::new(Some(Err(err))), calls: RefCell::new(Vec::new()) }
    }
}

impl ChatBackend for MockBackend {
    async fn query(&self, document: Document, request: &QueryRequest) -> Result<QueryResponse, ApiError> {
        self.calls.borrow_mut().push((document, request.clone()));
        self.result.borrow_mut().take().expect("backend called more than once")
    }
}

/// Run one full submit through `backend`, returning the final state.
fn submit(backend: &MockBackend, text: &str) -> ConversationState {
    let mut state = ConversationState::default();
    let query = state.begin_submit(text.to_owned()).unwrap();
    let reply = block_on(ask(backend, &query));
    state.finish(reply);
    state
}

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn chat_endpoint_appends_document_id() {
    assert_eq!(
        chat_endpoint("https://proxy.test/api/chat", Document::GujaratDcr),
        "https://proxy.test/api/chat/pdf2"
    );
}

#[test]
fn chat_endpoint_tolerates_trailing_slash() {
    assert_eq!(chat_endpoint("/api/chat/", Document::DiuDcr), "/api/chat/pdf3");
}

#[test]
fn default_proxy_url_has_no_trailing_slash() {
    assert!(!PROXY_URL.ends_with('/'));
}

// =============================================================
// ask + controller
// =============================================================

#[test]
fn answer_is_appended_after_the_question() {
    let backend = MockBackend::answering(r#"{"textResponse":"Answer A"}"#);
    let state = submit(&backend, "What is FSI?");

    assert_eq!(
        state.transcript.messages(),
        &[Message::user("What is FSI?"), Message::bot("Answer A")]
    );
    assert!(!state.loading);
}

#[test]
fn exactly_one_request_scoped_to_active_document() {
    let backend = MockBackend::answering(r#"{"textResponse":"ok"}"#);
    let mut state = ConversationState::default();
    state.select_document(Document::DiuDcr);
    let query = state.begin_submit("setbacks?".to_owned()).unwrap();
    block_on(ask(&backend, &query));

    let calls = backend.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (Document::DiuDcr, QueryRequest::query("setbacks?")));
}

#[test]
fn backend_error_is_shown_verbatim() {
    let backend = MockBackend::answering(r#"{"error":"Too many questions! Please wait 15 minutes."}"#);
    let state = submit(&backend, "What is FSI?");
    assert_eq!(
        state.transcript.last(),
        Some(&Message::bot("Too many questions! Please wait 15 minutes."))
    );
}

#[test]
fn empty_payload_uses_no_answer_fallback() {
    let backend = MockBackend::answering("{}");
    let state = submit(&backend, "What is FSI?");
    assert_eq!(state.transcript.last(), Some(&Message::bot(NO_ANSWER_TEXT)));
}

#[test]
fn transport_failure_shows_connection_error_and_clears_loading() {
    let backend = MockBackend::failing(ApiError::Transport("offline".to_owned()));
    let state = submit(&backend, "What is FSI?");
    assert_eq!(state.transcript.last(), Some(&Message::bot(CONNECTION_ERROR_TEXT)));
    assert!(!state.loading);
}

#[test]
fn decode_failure_shows_connection_error() {
    let backend = MockBackend::failing(ApiError::Decode("expected value".to_owned()));
    let state = submit(&backend, "What is FSI?");
    assert_eq!(state.transcript.last(), Some(&Message::bot(CONNECTION_ERROR_TEXT)));
}

#[test]
fn thinking_text_never_lands_in_transcript() {
    let backend = MockBackend::answering(r#"{"textResponse":"Answer A"}"#);
    let state = submit(&backend, "What is FSI?");
    assert!(state.transcript.messages().iter().all(|m| m.text != THINKING_TEXT));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_backend_is_unavailable() {
    let err = block_on(ProxyBackend.query(Document::DnhDcr, &QueryRequest::query("hi"))).unwrap_err();
    assert!(matches!(err, ApiError::Unavailable));
}
