//! HTTP middleware for request processing and protection.
//!
//! Provides bearer authentication (route and mount guards), sign-in rate
//! limiting, and request tracing.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
