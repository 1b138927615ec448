//! Shared helpers for integration tests
//!
//! Provides configuration builders that point both suggestion backends
//! at wiremock servers, plus canned response bodies for the remote APIs.

// Each integration test binary uses a subset of these helpers.
#![allow(dead_code)]

use serde_json::{json, Value};
use smartkey::backend::server::config::ServerConfig;

/// Signing secret used by every integration-test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Config with the grammar checker pointed at `grammar_url` and the
/// generative backend disabled.
pub fn test_config(grammar_url: String) -> ServerConfig {
    ServerConfig {
        jwt_secret: TEST_SECRET.to_string(),
        gemini_api_key: None,
        gemini_model: "gemini-flash-latest".to_string(),
        // Unreachable on purpose; tests that need the model override it
        gemini_base_url: "http://127.0.0.1:1".to_string(),
        grammar_api_url: grammar_url,
        allowed_origins: vec!["https://keyboard.example".to_string()],
        rate_limit_rpm: 60,
        request_timeout_secs: 5,
    }
}

/// Enable the generative backend against a mock base URL.
pub fn with_gemini(mut config: ServerConfig, base_url: String) -> ServerConfig {
    config.gemini_api_key = Some("test-api-key".to_string());
    config.gemini_base_url = base_url;
    config
}

/// A grammar-check API body with the given matches.
pub fn grammar_body(matches: Value, language_name: &str) -> Value {
    json!({
        "matches": matches,
        "language": { "name": language_name }
    })
}

/// A generateContent body whose single candidate carries `raw` as text.
pub fn gemini_body(raw: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": raw } ] } }
        ]
    })
}
