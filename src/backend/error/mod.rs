//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and middleware and can be
//! returned directly from handlers thanks to the `IntoResponse`
//! implementation, which produces the structured
//! `{ "error": ..., "message": ... }` JSON body and the matching
//! HTTP status code.

/// Error type definitions
pub mod types;

// Re-export commonly used types
pub use types::BackendError;
