/**
 * Request Gate Middleware
 *
 * The gatekeeper in front of the API: CORS, fixed-window rate limiting,
 * and bearer authentication, in that order.
 *
 * # Ordering
 *
 * 1. CORS headers are computed first and applied to every response,
 *    including rejections. Preflight requests short-circuit with 204.
 * 2. Rate limiting applies to all `/api/` paths. A rejected request
 *    never reaches the auth check, and the boundary-crossing request
 *    still consumes a slot.
 * 3. Bearer authentication applies to `/api/keyboard` paths only.
 *
 * `X-RateLimit-Limit` / `-Remaining` / `-Reset` ride on every `/api/`
 * response, errors included, so clients can render quota status without
 * a separate probe.
 */

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::auth::tokens::Claims;
use crate::backend::error::BackendError;
use crate::backend::ratelimit::RateLimitDecision;
use crate::backend::server::state::AppState;

/// Verified token claims attached to the request for downstream handlers
#[derive(Clone, Debug)]
pub struct AuthenticatedClient {
    pub subject: String,
    pub role: String,
}

/// Request gate middleware
///
/// Returns the inner handler's response with CORS and rate-limit headers
/// applied, or a 401/429 rejection carrying the same headers.
pub async fn request_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let method = request.method().clone();

    // CORS is decided up front so the headers reach every response,
    // rejected ones included.
    let cors_origin = allowed_origin(request.headers(), &state.config.allowed_origins);

    if method == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        if let Some(origin) = &cors_origin {
            apply_cors_headers(response.headers_mut(), origin);
        }
        return response;
    }

    let mut rate_decision = None;
    if path.starts_with("/api/") {
        let client = client_ip(request.headers());
        let decision = state.rate_limiter.check(&client);

        if !decision.allowed {
            tracing::warn!(client = %client, "rate limit exceeded");
            let mut response =
                BackendError::rate_limited("Rate limit exceeded").into_response();
            finish(response.headers_mut(), &cors_origin, &Some(decision));
            return response;
        }
        rate_decision = Some(decision);

        if path.starts_with("/api/keyboard") {
            match authenticate(&state, request.headers()) {
                Ok(claims) => {
                    // Attach the verified subject for observability; it
                    // does not influence which suggestions come back.
                    if let Ok(value) = HeaderValue::from_str(&claims.sub) {
                        request.headers_mut().insert("x-user-id", value);
                    }
                    request.extensions_mut().insert(AuthenticatedClient {
                        subject: claims.sub,
                        role: claims.role,
                    });
                }
                Err(error) => {
                    let mut response = error.into_response();
                    finish(response.headers_mut(), &cors_origin, &rate_decision);
                    return response;
                }
            }
        }
    }

    let mut response = next.run(request).await;
    finish(response.headers_mut(), &cors_origin, &rate_decision);
    response
}

/// Verify the bearer token on a suggestion request.
fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Claims, BackendError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            BackendError::unauthorized("Missing or invalid token")
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        BackendError::unauthorized("Missing or invalid token")
    })?;

    state.tokens.verify(token).ok_or_else(|| {
        tracing::warn!("token failed verification");
        BackendError::unauthorized("Token is invalid or expired")
    })
}

/// Return the request's `Origin` value when it may be echoed back:
/// either on the allow-list, or same-site (origin authority equals the
/// `Host` header).
fn allowed_origin(headers: &HeaderMap, allow_list: &[String]) -> Option<HeaderValue> {
    let origin = headers.get(header::ORIGIN)?;
    let origin_str = origin.to_str().ok()?;

    if allow_list.iter().any(|allowed| allowed == origin_str) {
        return Some(origin.clone());
    }

    let host = headers.get(header::HOST)?.to_str().ok()?;
    if origin_authority(origin_str) == host {
        return Some(origin.clone());
    }
    None
}

/// Strip the scheme and any path from an Origin value, leaving
/// `host[:port]`.
fn origin_authority(origin: &str) -> &str {
    let rest = origin
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(origin);
    rest.split('/').next().unwrap_or(rest)
}

/// Client key for rate limiting: first forwarded-for hop, else loopback.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .unwrap_or_else(|| "127.0.0.1".to_string())
}

fn finish(
    headers: &mut HeaderMap,
    cors_origin: &Option<HeaderValue>,
    rate_decision: &Option<RateLimitDecision>,
) {
    if let Some(origin) = cors_origin {
        apply_cors_headers(headers, origin);
    }
    if let Some(decision) = rate_decision {
        apply_rate_limit_headers(headers, decision);
    }
}

fn apply_cors_headers(headers: &mut HeaderMap, origin: &HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}

fn apply_rate_limit_headers(headers: &mut HeaderMap, decision: &RateLimitDecision) {
    headers.insert("x-ratelimit-limit", HeaderValue::from(decision.limit));
    headers.insert("x-ratelimit-remaining", HeaderValue::from(decision.remaining));
    headers.insert("x-ratelimit-reset", HeaderValue::from(decision.reset_ms));
}
