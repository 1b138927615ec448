//! Rate Limiting Module
//!
//! Fixed-window request counting keyed by client IP. Each key owns a
//! `RateLimitEntry { count, window_start_ms }`; when the current time has
//! advanced past the window, the entry resets to `count = 1`, otherwise
//! the count increments. The boundary-crossing request consumes a slot
//! before the limit comparison happens, so request N+1 inside a window
//! is the first one rejected.
//!
//! # Store Abstraction
//!
//! The counter state lives behind the [`RateLimitStore`] trait so a
//! shared external store can replace the in-process map without touching
//! the gate logic. Reset-and-increment is a single `hit` operation on the
//! trait: splitting it into separate get/increment/reset calls could not
//! be made race-free against parallel requests on the same key.
//!
//! The default [`InMemoryStore`] is a mutex-guarded map. Entries are
//! never evicted; they live until process restart. That is an accepted
//! limitation of the single-process demo deployment, not a leak to fix.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Window length for the fixed-window counter
pub const WINDOW_MS: i64 = 60_000;

/// Per-key counter state
#[derive(Debug, Clone, Copy)]
pub struct RateLimitEntry {
    pub count: u32,
    pub window_start_ms: i64,
}

/// Counter storage with fixed-window reset semantics
pub trait RateLimitStore: Send + Sync {
    /// Record a hit for `key` at `now_ms`, resetting the window first if
    /// it has expired. Returns the entry state after the increment.
    fn hit(&self, key: &str, now_ms: i64, window_ms: i64) -> RateLimitEntry;
}

/// Process-wide in-memory store, the default and test implementation
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, RateLimitEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateLimitStore for InMemoryStore {
    fn hit(&self, key: &str, now_ms: i64, window_ms: i64) -> RateLimitEntry {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.entry(key.to_string()).or_insert(RateLimitEntry {
            count: 0,
            window_start_ms: now_ms,
        });
        if now_ms - entry.window_start_ms > window_ms {
            entry.count = 1;
            entry.window_start_ms = now_ms;
        } else {
            entry.count += 1;
        }
        *entry
    }
}

/// Outcome of a rate-limit check, exposed as response headers
#[derive(Debug, Clone, Copy)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    /// Requests left in the window, floored at zero
    pub remaining: u32,
    /// Absolute epoch milliseconds at which the window resets
    pub reset_ms: i64,
}

/// Fixed-window rate limiter shared across request handlers
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    limit: u32,
    window_ms: i64,
}

impl RateLimiter {
    /// Create a limiter with the in-memory store and the 60s window.
    pub fn new(limit: u32) -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()), limit, WINDOW_MS)
    }

    pub fn with_store(store: Arc<dyn RateLimitStore>, limit: u32, window_ms: i64) -> Self {
        Self {
            store,
            limit,
            window_ms,
        }
    }

    /// Record a hit for `key` against the wall clock.
    pub fn check(&self, key: &str) -> RateLimitDecision {
        self.check_at(key, chrono::Utc::now().timestamp_millis())
    }

    /// Record a hit for `key` at an explicit time (used by tests).
    pub fn check_at(&self, key: &str, now_ms: i64) -> RateLimitDecision {
        let entry = self.store.hit(key, now_ms, self.window_ms);
        RateLimitDecision {
            allowed: entry.count <= self.limit,
            limit: self.limit,
            remaining: self.limit.saturating_sub(entry.count),
            reset_ms: entry.window_start_ms + self.window_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_up_to_limit_allowed() {
        let limiter = RateLimiter::new(3);
        for _ in 0..3 {
            assert!(limiter.check_at("10.0.0.1", 1_000).allowed);
        }
    }

    #[test]
    fn test_request_over_limit_rejected() {
        let limiter = RateLimiter::new(3);
        for _ in 0..3 {
            limiter.check_at("10.0.0.1", 1_000);
        }
        let decision = limiter.check_at("10.0.0.1", 1_000);
        assert!(!decision.allowed);
        assert_eq!(decision.remaining, 0);
    }

    #[test]
    fn test_window_elapse_resets_count_to_one() {
        let limiter = RateLimiter::new(2);
        for _ in 0..3 {
            limiter.check_at("10.0.0.1", 1_000);
        }
        let decision = limiter.check_at("10.0.0.1", 1_000 + WINDOW_MS + 1);
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 1);
        assert_eq!(decision.reset_ms, 1_000 + WINDOW_MS + 1 + WINDOW_MS);
    }

    #[test]
    fn test_remaining_floors_at_zero() {
        let limiter = RateLimiter::new(1);
        limiter.check_at("10.0.0.1", 0);
        limiter.check_at("10.0.0.1", 0);
        let decision = limiter.check_at("10.0.0.1", 0);
        assert_eq!(decision.remaining, 0);
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new(1);
        assert!(limiter.check_at("10.0.0.1", 0).allowed);
        assert!(!limiter.check_at("10.0.0.1", 0).allowed);
        assert!(limiter.check_at("10.0.0.2", 0).allowed);
    }

    #[test]
    fn test_reset_header_is_window_start_plus_window() {
        let limiter = RateLimiter::new(5);
        let first = limiter.check_at("10.0.0.1", 500);
        let second = limiter.check_at("10.0.0.1", 30_000);
        // Same window: reset time pinned to the first hit
        assert_eq!(first.reset_ms, 500 + WINDOW_MS);
        assert_eq!(second.reset_ms, 500 + WINDOW_MS);
    }
}
