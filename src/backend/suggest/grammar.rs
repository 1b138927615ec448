/**
 * Grammar-Check Adapter
 *
 * Rule-based suggestion backend and the guaranteed-available fallback.
 * It sends the text to a LanguageTool-style API, splices the top-ranked
 * replacement for each reported match into the text, fabricates three
 * next-word predictions from a fixed per-language word pool, and merges
 * emoji from the shared lexicon.
 *
 * The adapter never raises past its boundary: any failure resolves to a
 * passthrough response with `language: "error"`.
 */

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use std::sync::Mutex;
use thiserror::Error;

use crate::shared::keyboard::SuggestionResponse;
use crate::shared::lexicon;

/// Next-word pool for Latin-script input
const ENGLISH_NEXT_WORDS: [&str; 11] = [
    "is", "are", "the", "to", "for", "in", "on", "at", "with", "you", "where",
];

/// Next-word pool for Devanagari input (Marathi half)
const MARATHI_NEXT_WORDS: [&str; 12] = [
    "आहे", "नाही", "काय", "पण", "आणि", "कसे", "कुठे", "करा", "हो", "नको", "मी", "तुम्ही",
];

/// Next-word pool for Devanagari input (Hindi half)
const HINDI_NEXT_WORDS: [&str; 12] = [
    "है", "नहीं", "क्या", "लेकिन", "और", "कैसे", "कहाँ", "करो", "हाँ", "मत", "मैं", "आप",
];

/// Sentence-ending characters that suppress the pseudo-completion
const TERMINAL_PUNCTUATION: [char; 4] = ['.', '!', '?', '।'];

/// Failures internal to the grammar-check call chain
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar api returned status {0}")]
    Status(u16),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// One correction reported by the remote checker
#[derive(Debug, Deserialize)]
struct GrammarMatch {
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<Replacement>,
}

#[derive(Debug, Deserialize)]
struct Replacement {
    value: String,
}

#[derive(Debug, Deserialize)]
struct DetectedLanguage {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<GrammarMatch>,
    language: Option<DetectedLanguage>,
}

/// Rule-based grammar-check suggestion backend
pub struct GrammarAdapter {
    http: reqwest::Client,
    endpoint: String,
    rng: Mutex<StdRng>,
}

impl GrammarAdapter {
    pub fn new(http: reqwest::Client, endpoint: String) -> Self {
        Self {
            http,
            endpoint,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Build an adapter with a deterministic word-pool sampler.
    ///
    /// The next-word selection is random; seeding makes it repeatable
    /// for tests.
    pub fn with_seed(http: reqwest::Client, endpoint: String, seed: u64) -> Self {
        Self {
            http,
            endpoint,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Produce suggestions for `text`.
    ///
    /// Whitespace-only input short-circuits to the `"unknown"`
    /// passthrough without any network call. Every other failure mode is
    /// caught here and converted to the `"error"` passthrough.
    pub async fn suggest(&self, text: &str) -> SuggestionResponse {
        if text.trim().is_empty() {
            return SuggestionResponse::passthrough(text, "unknown");
        }

        match self.check(text).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("grammar check failed: {}", e);
                SuggestionResponse::passthrough(text, "error")
            }
        }
    }

    async fn check(&self, text: &str) -> Result<SuggestionResponse, GrammarError> {
        let devanagari = has_devanagari(text);
        let language = if devanagari { "auto" } else { "en-US" };

        let response = self
            .http
            .post(&self.endpoint)
            .form(&[("text", text), ("language", language), ("enabledOnly", "false")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GrammarError::Status(response.status().as_u16()));
        }

        let body: CheckResponse = response.json().await?;
        let mut corrected = apply_matches(text, body.matches);

        let next_words = self.pick_next_words(devanagari);

        // Emoji for the corrected text's last word come first, then the
        // predicted words.
        let mut suggestions: Vec<String> = Vec::new();
        if let Some(key) = lexicon::last_word_key(&corrected) {
            suggestions.extend(lexicon::emoji_for(&key).iter().map(|e| e.to_string()));
        }
        suggestions.extend(next_words.iter().cloned());

        // Append the top prediction as a pseudo-completion unless the
        // sentence already ended.
        if !ends_with_terminal(&corrected) {
            if let Some(first) = next_words.first() {
                corrected.push(' ');
                corrected.push_str(first);
            }
        }

        Ok(SuggestionResponse {
            original_text: text.to_string(),
            corrected_text: corrected,
            suggestions,
            language: body
                .language
                .map(|l| l.name)
                .unwrap_or_else(|| language.to_string()),
        })
    }

    /// Sample three next words without replacement from the pool for the
    /// detected script.
    fn pick_next_words(&self, devanagari: bool) -> Vec<String> {
        let pool: Vec<&str> = if devanagari {
            MARATHI_NEXT_WORDS
                .iter()
                .chain(HINDI_NEXT_WORDS.iter())
                .copied()
                .collect()
        } else {
            ENGLISH_NEXT_WORDS.to_vec()
        };

        let mut rng = self.rng.lock().unwrap();
        pool.choose_multiple(&mut *rng, 3)
            .map(|w| w.to_string())
            .collect()
    }
}

/// Apply corrections by splicing each match's top-ranked replacement into
/// the text.
///
/// Matches are applied in descending offset order so earlier edits do not
/// invalidate the offsets of edits not yet applied. Offsets are character
/// based; matches that fall outside the text are skipped.
fn apply_matches(text: &str, mut matches: Vec<GrammarMatch>) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    matches.sort_by(|a, b| b.offset.cmp(&a.offset));

    for m in matches {
        let Some(replacement) = m.replacements.first() else {
            continue;
        };
        if m.offset + m.length > chars.len() {
            continue;
        }
        chars.splice(m.offset..m.offset + m.length, replacement.value.chars());
    }

    chars.into_iter().collect()
}

fn has_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

fn ends_with_terminal(text: &str) -> bool {
    text.chars()
        .last()
        .is_some_and(|c| TERMINAL_PUNCTUATION.contains(&c))
}
