/**
 * Server Initialization
 *
 * This module assembles the Axum application: configuration, the shared
 * HTTP client, both suggestion adapters, the token issuer, the rate
 * limiter, and finally the router.
 *
 * # Initialization Process
 *
 * 1. Load configuration from the environment
 * 2. Build one bounded-timeout `reqwest` client shared by both adapters
 * 3. Construct the grammar adapter, and the generative adapter when a
 *    model credential is configured
 * 4. Construct the token issuer and rate limiter
 * 5. Create the router with the request gate layered on top
 *
 * # Error Handling
 *
 * Initialization is resilient by design: a missing model credential
 * downgrades the pipeline to grammar-checker-only mode with a warning
 * instead of refusing to start.
 */

use axum::Router;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::auth::tokens::TokenIssuer;
use crate::backend::ratelimit::RateLimiter;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::suggest::{GenerativeAdapter, GrammarAdapter, SuggestionService};

/// Create the Axum application from environment configuration.
pub fn create_app() -> Router<()> {
    create_app_with_config(ServerConfig::from_env())
}

/// Create the Axum application from an explicit configuration.
///
/// Integration tests use this to point both adapters at mock servers.
pub fn create_app_with_config(config: ServerConfig) -> Router<()> {
    tracing::info!("initializing smart keyboard suggestion server");

    let config = Arc::new(config);

    // One client, one timeout bound, shared by both adapters.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .expect("failed to construct HTTP client");

    let grammar = GrammarAdapter::new(http.clone(), config.grammar_api_url.clone());

    let generative = config.gemini_api_key.as_ref().map(|key| {
        GenerativeAdapter::new(
            http,
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            key.clone(),
        )
    });
    if generative.is_none() {
        tracing::warn!(
            "GEMINI_API_KEY not set, the grammar checker will serve all suggestions"
        );
    }

    let app_state = AppState {
        tokens: Arc::new(TokenIssuer::new(&config.jwt_secret)),
        rate_limiter: RateLimiter::new(config.rate_limit_rpm),
        suggestions: Arc::new(SuggestionService::new(generative, grammar)),
        config,
    };

    tracing::info!("router configured");
    create_router(app_state)
}
