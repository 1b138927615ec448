//! SmartKey - Main Library
//!
//! SmartKey is the backend for an AI smart-keyboard web demo. It accepts
//! in-progress text from a typing client and returns grammar corrections,
//! next-word predictions, and emoji suggestions from a generative model,
//! with a rule-based grammar checker as the always-available fallback.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between server and client logic
//!   - The suggestion request/response contract
//!   - The static emoji lexicon
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with the suggestion and token endpoints
//!   - Request gate (CORS, rate limiting, bearer auth)
//!   - Generative and grammar-check suggestion adapters
//!
//! - **`client`** - Client-side typing logic
//!   - Trigger controller deciding when to request suggestions
//!   - Zero-latency emoji overlay for the word being typed
//!
//! # Usage
//!
//! ```rust,no_run
//! use smartkey::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app();
//! // Use app with an Axum server
//! # }
//! ```

pub mod backend;
pub mod client;
pub mod shared;
