//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Route Organization
//!
//! - **`router`** - Main router creation and middleware layering
//! - **`api_routes`** - API endpoint table
//!
//! # Routes
//!
//! - `GET /api/auth/token` - Issue a demo bearer token
//! - `POST /api/keyboard/suggest` - Suggestion pipeline (bearer-gated)
//!
//! Everything else falls through to a 404 handler.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
