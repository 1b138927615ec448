/**
 * API Route Handlers
 *
 * This module wires the API endpoints into the router:
 *
 * - `GET /api/auth/token` - Issue a demo bearer token
 * - `POST /api/keyboard/suggest` - Suggestion pipeline (bearer-gated)
 */

use axum::Router;

use crate::backend::auth::issue_token;
use crate::backend::server::state::AppState;
use crate::backend::suggest::handle_suggest;

/// Configure API routes
///
/// The suggestion endpoint's authentication is not wired here; the
/// request gate middleware enforces it for every `/api/keyboard` path
/// before routing happens.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/token", axum::routing::get(issue_token))
        .route("/api/keyboard/suggest", axum::routing::post(handle_suggest))
}
