/**
 * Token Endpoint Handler
 *
 * Implements GET /api/auth/token. The demo issues a token
 * unconditionally with a fresh subject id; this is the point where a
 * real deployment would verify credentials first.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::tokens::TokenIssuer;
use crate::backend::error::BackendError;

/// Response body for the token endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Issue a demo bearer token
///
/// # Returns
///
/// JSON `{ "token": "..." }` with a 24-hour token for a fresh demo
/// subject id.
///
/// # Errors
///
/// * `500 Internal Server Error` - if token signing fails
pub async fn issue_token(
    State(tokens): State<Arc<TokenIssuer>>,
) -> Result<Json<TokenResponse>, BackendError> {
    let subject = Uuid::new_v4().to_string();
    let token = tokens
        .issue(&subject, "demo", "Keyboard Demo User")
        .map_err(|e| {
            tracing::error!("failed to sign token: {:?}", e);
            BackendError::internal("Failed to issue token")
        })?;

    tracing::info!(subject = %subject, "issued demo token");
    Ok(Json(TokenResponse { token }))
}
