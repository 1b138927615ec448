//! Suggestion Pipeline Module
//!
//! The orchestration pipeline behind the suggestion endpoint: two
//! heterogeneous backends normalized into one response contract, with a
//! fallback chain between them.
//!
//! # Architecture
//!
//! - **`generative`** - Gemini-backed adapter (primary when configured)
//! - **`grammar`** - LanguageTool-backed adapter (fallback, always available)
//! - **`extract`** - Defensive JSON extraction from model output
//! - **`handlers`** - The HTTP handler for `POST /api/keyboard/suggest`
//!
//! # Fallback Chain
//!
//! ```text
//! text ──► SuggestionService::suggest
//!            │  (empty input: short-circuit, no network)
//!            ├─ no model credential ──────────► GrammarAdapter
//!            └─ GenerativeAdapter
//!                 └─ any failure, quota included ──► GrammarAdapter
//!                        └─ its own failure ──► passthrough, language "error"
//! ```
//!
//! Every path resolves to a valid `SuggestionResponse`; the pipeline
//! never returns an error to the HTTP layer. Quota exhaustion on the
//! model is deliberately treated like any other failure and downgraded
//! to the rule-based backend rather than surfaced to the client.

/// Defensive JSON extraction from model output
pub mod extract;

/// Generative model adapter
pub mod generative;

/// Rule-based grammar-check adapter
pub mod grammar;

/// HTTP handlers for the suggestion endpoint
pub mod handlers;

pub use generative::GenerativeAdapter;
pub use grammar::GrammarAdapter;
pub use handlers::handle_suggest;

use crate::shared::keyboard::SuggestionResponse;
use crate::shared::lexicon;

/// Orchestrates the generative and grammar-check adapters
pub struct SuggestionService {
    generative: Option<GenerativeAdapter>,
    grammar: GrammarAdapter,
}

impl SuggestionService {
    /// Build the service. `generative` is `None` when no model
    /// credential is configured, making the grammar checker the sole
    /// backend.
    pub fn new(generative: Option<GenerativeAdapter>, grammar: GrammarAdapter) -> Self {
        Self {
            generative,
            grammar,
        }
    }

    /// Produce suggestions for `text`, never failing.
    pub async fn suggest(&self, text: &str) -> SuggestionResponse {
        if text.trim().is_empty() {
            return SuggestionResponse::passthrough(text, "unknown");
        }

        let Some(model) = &self.generative else {
            return self.grammar.suggest(text).await;
        };

        match model.complete(text).await {
            Ok(mut response) => {
                // The grammar adapter merges emoji itself; model
                // responses get the same treatment here so the server
                // stays the single source of truth for the merge.
                lexicon::prepend_emoji(&mut response);
                response
            }
            Err(e) => {
                tracing::warn!("generative backend failed, using grammar checker: {}", e);
                self.grammar.suggest(text).await
            }
        }
    }
}
