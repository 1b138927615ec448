//! Backend Module
//!
//! This module contains all server-side code for the smart keyboard
//! suggestion service: an Axum HTTP server exposing the suggestion and
//! token endpoints behind a CORS / rate-limit / auth gate.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`middleware`** - The request gate (CORS, rate limiting, auth)
//! - **`ratelimit`** - Fixed-window rate limiter and its store abstraction
//! - **`auth`** - Bearer token issuance and verification
//! - **`suggest`** - The suggestion pipeline (generative + grammar adapters)
//! - **`error`** - Backend-specific error types
//!
//! # Request Flow
//!
//! ```text
//! POST /api/keyboard/suggest
//!   └─ request gate: CORS headers → rate limit → bearer auth
//!        └─ handler: 400 on missing text
//!             └─ SuggestionService: generative adapter,
//!                grammar-check fallback, emoji merge
//! ```
//!
//! # State Management
//!
//! `AppState` holds the configuration, token issuer, rate limiter, and
//! suggestion pipeline. Everything is `Arc`-shared and safe for
//! concurrent requests; the only mutable state is the rate limiter's
//! counter map behind a mutex.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Middleware for request processing
pub mod middleware;

/// Fixed-window rate limiting
pub mod ratelimit;

/// Backend error types
pub mod error;

/// Bearer token issuance and verification
pub mod auth;

/// Suggestion pipeline
pub mod suggest;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
pub use suggest::SuggestionService;
