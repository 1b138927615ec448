//! Server Module
//!
//! Server-side code for initializing and configuring the Axum HTTP
//! server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading from the environment
//! - **`init`** - Application assembly and router creation

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::{create_app, create_app_with_config};
pub use state::AppState;
