//! Middleware Module
//!
//! HTTP middleware for the backend server. The single gate middleware
//! runs in front of every route and handles CORS, rate limiting, and
//! bearer authentication in a fixed order.

pub mod gate;

pub use gate::{request_gate, AuthenticatedClient};
