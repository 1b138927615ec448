//! Request gate integration tests
//!
//! Drives the real router (gate middleware included) with axum-test,
//! covering the auth matrix, rate limiting, and the CORS policy.

mod common;

use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use common::{grammar_body, test_config, TEST_SECRET};
use serde_json::json;
use smartkey::backend::auth::tokens::{TokenIssuer, TOKEN_TTL_SECS};
use smartkey::backend::server::init::create_app_with_config;
use smartkey::backend::server::config::ServerConfig;
use smartkey::shared::SuggestionResponse;
use std::time::{SystemTime, UNIX_EPOCH};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn spawn(config: ServerConfig) -> TestServer {
    TestServer::new(create_app_with_config(config)).unwrap()
}

/// Mock grammar server that reports no matches.
async fn clean_grammar_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/check"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(grammar_body(json!([]), "English")),
        )
        .mount(&server)
        .await;
    server
}

fn valid_token() -> String {
    TokenIssuer::new(TEST_SECRET)
        .issue("gate-test-user", "demo", "Gate Test")
        .unwrap()
}

#[tokio::test]
async fn test_token_endpoint_issues_verifiable_token() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    let response = server.get("/api/auth/token").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().unwrap();
    let claims = TokenIssuer::new(TEST_SECRET).verify(token).unwrap();
    assert_eq!(claims.role, "demo");
}

#[tokio::test]
async fn test_suggest_without_auth_header() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    let response = server
        .post("/api/keyboard/suggest")
        .json(&json!({ "text": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["message"], "Missing or invalid token");
}

#[tokio::test]
async fn test_suggest_with_garbage_token() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    let response = server
        .post("/api/keyboard/suggest")
        .add_header("Authorization", "Bearer not.a.token")
        .json(&json!({ "text": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Token is invalid or expired");
}

#[tokio::test]
async fn test_suggest_with_expired_token() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let expired = TokenIssuer::new(TEST_SECRET)
        .issue_at("gate-test-user", "demo", "Gate Test", now - TOKEN_TTL_SECS - 3600)
        .unwrap();

    let response = server
        .post("/api/keyboard/suggest")
        .add_header("Authorization", format!("Bearer {expired}"))
        .json(&json!({ "text": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_suggest_with_valid_token() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    let response = server
        .post("/api/keyboard/suggest")
        .add_header("Authorization", format!("Bearer {}", valid_token()))
        .json(&json!({ "text": "I am going home" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: SuggestionResponse = response.json();
    assert_eq!(body.original_text, "I am going home");
    assert!(!body.corrected_text.is_empty());
    assert_eq!(body.language, "English");
}

#[tokio::test]
async fn test_suggest_missing_text() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    let response = server
        .post("/api/keyboard/suggest")
        .add_header("Authorization", format!("Bearer {}", valid_token()))
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Text is required");
}

#[tokio::test]
async fn test_rate_limit_headers_on_success() {
    let grammar = clean_grammar_server().await;
    let mut config = test_config(format!("{}/v2/check", grammar.uri()));
    config.rate_limit_rpm = 10;
    let server = spawn(config);

    let response = server.get("/api/auth/token").await;
    let headers = response.headers();
    assert_eq!(headers.get("x-ratelimit-limit").unwrap(), "10");
    assert_eq!(headers.get("x-ratelimit-remaining").unwrap(), "9");
    assert!(headers.contains_key("x-ratelimit-reset"));
}

#[tokio::test]
async fn test_rate_limit_exhaustion() {
    let grammar = clean_grammar_server().await;
    let mut config = test_config(format!("{}/v2/check", grammar.uri()));
    config.rate_limit_rpm = 3;
    let server = spawn(config);

    for _ in 0..3 {
        let response = server.get("/api/auth/token").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let response = server.get("/api/auth/token").await;
    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
    let headers = response.headers();
    assert_eq!(headers.get("x-ratelimit-remaining").unwrap(), "0");
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Too Many Requests");
    assert_eq!(body["message"], "Rate limit exceeded");
}

#[tokio::test]
async fn test_rate_limit_rejection_happens_before_auth() {
    let grammar = clean_grammar_server().await;
    let mut config = test_config(format!("{}/v2/check", grammar.uri()));
    config.rate_limit_rpm = 1;
    let server = spawn(config);

    let _ = server.get("/api/auth/token").await;

    // No Authorization header at all; the 429 must win over the 401.
    let response = server
        .post("/api/keyboard/suggest")
        .json(&json!({ "text": "hello" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_keyed_by_forwarded_for() {
    let grammar = clean_grammar_server().await;
    let mut config = test_config(format!("{}/v2/check", grammar.uri()));
    config.rate_limit_rpm = 1;
    let server = spawn(config);

    let first = server
        .get("/api/auth/token")
        .add_header("x-forwarded-for", "203.0.113.5")
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let same_client = server
        .get("/api/auth/token")
        .add_header("x-forwarded-for", "203.0.113.5")
        .await;
    assert_eq!(same_client.status_code(), StatusCode::TOO_MANY_REQUESTS);

    let other_client = server
        .get("/api/auth/token")
        .add_header("x-forwarded-for", "203.0.113.6")
        .await;
    assert_eq!(other_client.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_allowed_origin_echoed() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    let response = server
        .get("/api/auth/token")
        .add_header("Origin", "https://keyboard.example")
        .await;

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "https://keyboard.example"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_foreign_origin_gets_no_headers() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    let response = server
        .get("/api/auth/token")
        .add_header("Origin", "https://evil.example")
        .await;

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_cors_preflight_short_circuits() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    // No Authorization header: preflight must not hit the auth gate
    let response = server
        .method(Method::OPTIONS, "/api/keyboard/suggest")
        .add_header("Origin", "https://keyboard.example")
        .await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "https://keyboard.example"
    );
}

#[tokio::test]
async fn test_rate_limit_headers_on_auth_failure() {
    let grammar = clean_grammar_server().await;
    let server = spawn(test_config(format!("{}/v2/check", grammar.uri())));

    let response = server
        .post("/api/keyboard/suggest")
        .json(&json!({ "text": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("x-ratelimit-limit"));
    assert!(response.headers().contains_key("x-ratelimit-remaining"));
}
