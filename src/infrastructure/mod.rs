//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and wraps the
//! outside world the gateway talks to.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`security`] - Password hashing and access tokens
//! - [`upstream`] - HTTP forwarding to externally hosted sub-applications

pub mod persistence;
pub mod security;
pub mod upstream;
