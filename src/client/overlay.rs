/**
 * Local Suggestion Overlay
 *
 * While a suggestion request is in flight, the client can already show
 * emoji for the word being typed. This module computes that zero-latency
 * overlay from the shared lexicon and merges a later-arriving server
 * response behind it.
 *
 * The server response is authoritative; the overlay only bridges the gap
 * until it lands.
 */

use crate::shared::keyboard::SuggestionResponse;
use crate::shared::lexicon;

/// Emoji suggestions for the in-progress last word of `text`.
///
/// Computed synchronously with no network involvement.
pub fn local_suggestions(text: &str) -> Vec<String> {
    match lexicon::last_word_key(text) {
        Some(key) => lexicon::emoji_for(&key)
            .iter()
            .map(|emoji| emoji.to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Merge a server response into the displayed overlay.
///
/// Overlay emoji stay in front; server suggestions follow, with entries
/// already shown locally deduplicated away.
pub fn merge_suggestions(local: &[String], response: &SuggestionResponse) -> Vec<String> {
    let mut merged = local.to_vec();
    for suggestion in &response.suggestions {
        if !merged.contains(suggestion) {
            merged.push(suggestion.clone());
        }
    }
    merged
}
