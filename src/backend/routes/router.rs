/**
 * Router Configuration
 *
 * This module provides the main router creation function.
 *
 * # Route Order
 *
 * 1. API routes (token issuance, suggestions)
 * 2. Fallback handler (404)
 *
 * The request gate middleware wraps the whole router, so CORS headers,
 * rate limiting, and authentication run before any route matching.
 */

use axum::Router;

use crate::backend::middleware::request_gate;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pipeline and services
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // The gate wraps everything: CORS, rate limiting, auth
    let router = router.layer(axum::middleware::from_fn_with_state(
        app_state.clone(),
        request_gate,
    ));

    router.with_state(app_state)
}
