//! HTTP surface of the gateway's own endpoints and the Climsoft API.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`extract`] - Extractors that reject with the JSON error body
//! - [`handlers`] - Route handlers
//! - [`middleware`] - Bearer guards, rate limiting, request tracing
//! - [`routes`] - Route groups, mounted by [`crate::routes`] and [`crate::mounts`]

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
