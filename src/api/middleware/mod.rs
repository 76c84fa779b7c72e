//! HTTP middleware for request processing and protection.
//!
//! Provides Bearer-token authentication for write routes, per-IP rate
//! limiting, and request tracing.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
