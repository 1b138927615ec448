/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The loaded server configuration
 * - The token issuer (signing/verification keys)
 * - The shared rate limiter
 * - The suggestion pipeline
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe for concurrent use: `Arc` for
 * the shared services, and the rate limiter guards its counter map with
 * an internal mutex so parallel requests on the same client key cannot
 * race the read-modify-write.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::tokens::TokenIssuer;
use crate::backend::ratelimit::RateLimiter;
use crate::backend::server::config::ServerConfig;
use crate::backend::suggest::SuggestionService;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration (CORS allow-list, limits, endpoints)
    pub config: Arc<ServerConfig>,

    /// Bearer token signing and verification
    pub tokens: Arc<TokenIssuer>,

    /// Fixed-window rate limiter keyed by client IP
    pub rate_limiter: RateLimiter,

    /// The suggestion pipeline (generative + grammar fallback)
    pub suggestions: Arc<SuggestionService>,
}

/// Allows handlers to take `State(Arc<TokenIssuer>)` directly.
impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Allows handlers to take `State(Arc<SuggestionService>)` directly.
impl FromRef<AppState> for Arc<SuggestionService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.suggestions.clone()
    }
}

/// Allows handlers to take `State(RateLimiter)` directly.
impl FromRef<AppState> for RateLimiter {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.rate_limiter.clone()
    }
}
