//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional chat upstream and the proxy's rate limiter.

use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::upstream::ChatUpstream;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Chat backend. `None` if the proxy env vars are not configured.
    pub upstream: Option<Arc<dyn ChatUpstream>>,
    /// In-memory rate limiter for proxied questions.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Option<Arc<dyn ChatUpstream>>, rate_limiter: RateLimiter) -> Self {
        Self { upstream, rate_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
