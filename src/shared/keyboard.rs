/**
 * Keyboard Suggestion Contract
 *
 * This module defines the request and response types exchanged between
 * a typing client and the suggestion endpoint. Both suggestion adapters
 * normalize their output into `SuggestionResponse`, so callers never see
 * which backend produced a result.
 */

use serde::{Deserialize, Serialize};

/// Request body for the suggestion endpoint
///
/// `text` defaults to an empty string when the field is absent so the
/// handler can reject missing text with a 400 instead of a generic
/// deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// The complete in-progress text from the client's input buffer
    #[serde(default)]
    pub text: String,
}

/// Normalized suggestion result returned by both adapters
///
/// # Invariants
///
/// - `corrected_text` is never empty; on any failure it falls back to
///   `original_text`.
/// - `language` is always populated. Failure modes are conveyed inline:
///   `"unknown"` for empty input, `"error"` when the grammar checker
///   itself failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// The text exactly as the client sent it
    pub original_text: String,
    /// The corrected (and possibly pseudo-completed) text
    pub corrected_text: String,
    /// Suggestion chips: emoji first, then predicted next words
    pub suggestions: Vec<String>,
    /// Detected language name, or a sentinel describing a failure mode
    pub language: String,
}

impl SuggestionResponse {
    /// Build a response that echoes the input unchanged with no suggestions.
    ///
    /// Used for the empty-input short circuit (`language: "unknown"`) and
    /// for the grammar adapter's terminal failure (`language: "error"`).
    pub fn passthrough(text: &str, language: &str) -> Self {
        Self {
            original_text: text.to_string(),
            corrected_text: text.to_string(),
            suggestions: Vec::new(),
            language: language.to_string(),
        }
    }
}
