/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables,
 * with development defaults where safe and warnings where not.
 *
 * # Configuration Sources
 *
 * | Variable             | Default                                     |
 * |----------------------|---------------------------------------------|
 * | `JWT_SECRET`         | insecure development default (warns)        |
 * | `GEMINI_API_KEY`     | unset → grammar-checker-only mode           |
 * | `GEMINI_MODEL`       | `gemini-flash-latest`                       |
 * | `GEMINI_BASE_URL`    | `https://generativelanguage.googleapis.com` |
 * | `LANGUAGETOOL_URL`   | `https://api.languagetool.org/v2/check`     |
 * | `ALLOWED_ORIGINS`    | empty (same-site requests still pass)       |
 * | `RATE_LIMIT_RPM`     | 60                                          |
 * | `SUGGEST_TIMEOUT_SECS` | 10                                        |
 *
 * # Error Handling
 *
 * Configuration problems never prevent startup: unparseable values fall
 * back to defaults, and a missing model credential only disables the
 * generative backend.
 */

/// Development-only signing secret, used when `JWT_SECRET` is unset
const DEFAULT_JWT_SECRET: &str = "default_secret_please_change";

/// Runtime configuration for the suggestion server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Symmetric secret for bearer token signing
    pub jwt_secret: String,
    /// Generative model credential; `None` disables the generative backend
    pub gemini_api_key: Option<String>,
    /// Model name used for generateContent calls
    pub gemini_model: String,
    /// Base URL of the generative API (overridable for tests)
    pub gemini_base_url: String,
    /// Full URL of the grammar-check endpoint
    pub grammar_api_url: String,
    /// Origins allowed by the CORS policy, beyond same-site requests
    pub allowed_origins: Vec<String>,
    /// Requests allowed per client per 60-second window
    pub rate_limit_rpm: u32,
    /// Bound on outbound calls to either suggestion backend
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!(
                "JWT_SECRET not set, using the insecure development default"
            );
            DEFAULT_JWT_SECRET.to_string()
        });

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let rate_limit_rpm = std::env::var("RATE_LIMIT_RPM")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(60);

        let request_timeout_secs = std::env::var("SUGGEST_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(10);

        Self {
            jwt_secret,
            gemini_api_key,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-flash-latest".to_string()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            grammar_api_url: std::env::var("LANGUAGETOOL_URL")
                .unwrap_or_else(|_| "https://api.languagetool.org/v2/check".to_string()),
            allowed_origins,
            rate_limit_rpm,
            request_timeout_secs,
        }
    }
}
