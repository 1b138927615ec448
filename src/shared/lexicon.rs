/**
 * Emoji Lexicon
 *
 * Static mapping from common words to candidate emoji. The lexicon is
 * immutable at runtime and shared by the grammar adapter (server-side
 * merge) and the client overlay (zero-latency preview).
 *
 * Keys are lowercased, punctuation-stripped words; use `last_word_key`
 * to derive a lookup key from raw text.
 */

use crate::shared::keyboard::SuggestionResponse;

/// Look up the candidate emoji for a word.
///
/// Returns an empty slice for words with no lexicon entry. The word must
/// already be normalized (see [`last_word_key`]).
pub fn emoji_for(word: &str) -> &'static [&'static str] {
    match word {
        "hello" => &["👋", "🙂", "😊"],
        "hi" => &["👋", "😊"],
        "happy" => &["😊", "😄", "✨"],
        "love" => &["❤️", "😍", "🥰"],
        "sad" => &["😢", "😔", "💔"],
        "home" => &["🏠", "🏡"],
        "good" => &["👍", "✨"],
        "thanks" => &["🙏", "💖"],
        "ok" => &["👌", "✅"],
        "fire" => &["🔥"],
        "cool" => &["😎"],
        "lol" => &["😂"],
        _ => &[],
    }
}

/// Derive the lexicon key for the last word of `text`.
///
/// The last whitespace-separated word is lowercased and stripped of
/// anything that is not alphanumeric. Returns `None` when no word
/// survives the stripping.
pub fn last_word_key(text: &str) -> Option<String> {
    let word = text.split_whitespace().last()?;
    let key: String = word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Prepend lexicon emoji for the corrected text's last word.
///
/// Emoji take priority over predicted words, so they are inserted at the
/// front of the suggestion list. Entries already present are skipped.
pub fn prepend_emoji(response: &mut SuggestionResponse) {
    let Some(key) = last_word_key(&response.corrected_text) else {
        return;
    };
    for emoji in emoji_for(&key).iter().rev() {
        if !response.suggestions.iter().any(|s| s == emoji) {
            response.suggestions.insert(0, emoji.to_string());
        }
    }
}
