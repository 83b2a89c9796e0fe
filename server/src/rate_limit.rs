//! In-memory rate limiting for proxied chat questions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by client address. Two limits enforced:
//! - Per-client: 10 questions / 15 min
//! - Global: 100 upstream calls / min
//!
//! Rejections are reported to the widget as a JSON `error`, which it shows
//! verbatim, so each error also carries a visitor-facing message.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::env_parse_u64;

const DEFAULT_PER_CLIENT_LIMIT: u64 = 10;
const DEFAULT_PER_CLIENT_WINDOW_SECS: u64 = 15 * 60;

const DEFAULT_GLOBAL_LIMIT: u64 = 100;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub per_client_window: Duration,
    pub global_limit: usize,
    pub global_window: Duration,
}

impl RateLimitConfig {
    /// Optional:
    /// - `RATE_LIMIT_QUESTIONS`, `RATE_LIMIT_WINDOW_SECS`: per client
    /// - `RATE_LIMIT_GLOBAL`, `RATE_LIMIT_GLOBAL_WINDOW_SECS`: all clients
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            per_client_limit: env_limit("RATE_LIMIT_QUESTIONS", DEFAULT_PER_CLIENT_LIMIT),
            per_client_window: Duration::from_secs(env_parse_u64(
                "RATE_LIMIT_WINDOW_SECS",
                DEFAULT_PER_CLIENT_WINDOW_SECS,
            )),
            global_limit: env_limit("RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(env_parse_u64(
                "RATE_LIMIT_GLOBAL_WINDOW_SECS",
                DEFAULT_GLOBAL_WINDOW_SECS,
            )),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_client_limit: usize::try_from(DEFAULT_PER_CLIENT_LIMIT).unwrap_or(usize::MAX),
            per_client_window: Duration::from_secs(DEFAULT_PER_CLIENT_WINDOW_SECS),
            global_limit: usize::try_from(DEFAULT_GLOBAL_LIMIT).unwrap_or(usize::MAX),
            global_window: Duration::from_secs(DEFAULT_GLOBAL_WINDOW_SECS),
        }
    }
}

fn env_limit(key: &str, default: u64) -> usize {
    usize::try_from(env_parse_u64(key, default)).unwrap_or(usize::MAX)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("per-client rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerClientExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

impl RateLimitError {
    /// Message shown to the visitor in the chat transcript.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::PerClientExceeded { window_secs, .. } => {
                format!("Too many questions! Please wait {}.", wait_phrase(*window_secs))
            }
            Self::GlobalExceeded { .. } => "The assistant is busy. Please try again shortly.".to_owned(),
        }
    }
}

fn wait_phrase(window_secs: u64) -> String {
    let minutes = window_secs.div_ceil(60).max(1);
    if minutes == 1 { "1 minute".to_owned() } else { format!("{minutes} minutes") }
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-client request timestamps.
    client_requests: HashMap<String, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    /// Limiter configured from the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RateLimitConfig::from_env())
    }

    #[must_use]
    pub fn with_config(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both per-client and global rate limits, then record the request.
    pub fn check_and_record(&self, client: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, client: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        let client_deque = inner.client_requests.entry(client.to_owned()).or_default();
        prune_window(client_deque, now, cfg.per_client_window);
        if client_deque.len() >= cfg.per_client_limit {
            return Err(RateLimitError::PerClientExceeded {
                limit: cfg.per_client_limit,
                window_secs: cfg.per_client_window.as_secs(),
            });
        }

        client_deque.push_back(now);
        inner.global_requests.push_back(now);

        // Idle clients would otherwise accumulate forever.
        inner.client_requests.retain(|_, deque| {
            deque.back().is_some_and(|&last| now.duration_since(last) <= cfg.per_client_window)
        });

        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
