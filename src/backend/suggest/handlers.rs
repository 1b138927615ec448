/**
 * Suggestion Endpoint Handler
 *
 * Implements POST /api/keyboard/suggest. Authentication, rate limiting,
 * and CORS have already happened in the request gate by the time this
 * handler runs; its only rejection is the missing-text 400.
 */

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::suggest::SuggestionService;
use crate::shared::keyboard::{SuggestionRequest, SuggestionResponse};

/// Suggestion handler
///
/// # Arguments
///
/// * `State(service)` - The suggestion pipeline
/// * `Json(request)` - Request body containing the in-progress text
///
/// # Returns
///
/// A normalized `SuggestionResponse`. The pipeline recovers every
/// upstream failure internally, so this handler only fails on a missing
/// `text` field.
///
/// # Errors
///
/// * `400 Bad Request` - body has no text
pub async fn handle_suggest(
    State(service): State<Arc<SuggestionService>>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, BackendError> {
    if request.text.is_empty() {
        return Err(BackendError::bad_request("Text is required"));
    }

    tracing::debug!(chars = request.text.chars().count(), "suggestion request");
    let response = service.suggest(&request.text).await;
    Ok(Json(response))
}
