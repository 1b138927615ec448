//! Authentication Module
//!
//! This module handles bearer token issuance and verification for the
//! suggestion API.
//!
//! # Architecture
//!
//! - **`tokens`** - JWT signing and fail-closed verification
//! - **`handlers`** - HTTP handler for the demo token endpoint
//!
//! # Authentication Flow
//!
//! 1. **Issue**: client calls `GET /api/auth/token` → 24-hour JWT returned
//! 2. **Present**: client sends `Authorization: Bearer <token>` on every
//!    suggestion call
//! 3. **Verify**: the request gate verifies the signature and expiry
//!    statelessly; nothing is stored server-side
//!
//! # Security
//!
//! - Tokens are HS256-signed with a secret from configuration
//! - Verification fails closed: any malformed, tampered, or expired
//!   token is treated as unauthenticated
//! - The demo token endpoint issues unconditionally; a real credential
//!   check would sit in front of it

/// JWT token generation and validation
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{issue_token, TokenResponse};
pub use tokens::{Claims, TokenIssuer, TOKEN_TTL_SECS};
