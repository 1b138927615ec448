//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and the client-side typing logic. All types are designed for
//! serialization and transmission over HTTP.
//!
//! # Overview
//!
//! - **`keyboard`** - The suggestion request/response contract
//! - **`lexicon`** - The static word-to-emoji mapping

/// Suggestion request/response contract
pub mod keyboard;

/// Static emoji lexicon
pub mod lexicon;

/// Re-export commonly used types for convenience
pub use keyboard::{SuggestionRequest, SuggestionResponse};
