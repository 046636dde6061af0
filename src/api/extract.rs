//! Request extractors that reject with [`AppError`].
//!
//! Axum's stock `Json`, `Form` and `Query` reject with plain-text bodies.
//! These wrappers keep the uniform JSON error body for malformed input.

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::error::AppError;
use crate::infrastructure::security::Claims;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct ApiForm<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Claims of the bearer token verified by the auth middleware.
///
/// Only usable on routes behind [`crate::api::middleware::auth`]; elsewhere
/// it rejects with 401.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthClaims)
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    serde_json::json!({ "reason": "Request was not authenticated" }),
                )
            })
    }
}
