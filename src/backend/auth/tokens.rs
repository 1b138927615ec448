/**
 * Token Issuer
 *
 * This module handles JWT bearer token generation and validation for the
 * suggestion API. Tokens are signed with a symmetric secret, carry the
 * subject id, role, and display name, and expire 24 hours after issuance.
 * Verification is stateless: nothing is persisted server-side.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token validity period: 24 hours
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject id
    pub sub: String,
    /// Role granted to the holder
    pub role: String,
    /// Display name
    pub name: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signs and verifies bearer tokens with a symmetric secret
///
/// `verify` fails closed: a signature mismatch, malformed token, or
/// expired claim all come back as `None`. Callers treat `None` as
/// "unauthenticated" and never see the underlying decode error.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Issue a signed token expiring 24 hours from now.
    pub fn issue(
        &self,
        sub: &str,
        role: &str,
        name: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        self.issue_at(sub, role, name, now)
    }

    /// Issue a token with an explicit issuance time.
    ///
    /// Lets tests mint already-expired tokens; production callers use
    /// [`issue`](Self::issue).
    pub fn issue_at(
        &self,
        sub: &str,
        role: &str,
        name: &str,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: sub.to_string(),
            role: role.to_string(),
            name: name.to_string(),
            exp: issued_at + TOKEN_TTL_SECS,
            iat: issued_at,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its claims, or `None` if the token is
    /// malformed, tampered with, or expired.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding, &Validation::default()) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("token verification failed: {:?}", e);
                None
            }
        }
    }
}
