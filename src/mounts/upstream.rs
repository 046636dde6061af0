//! Sub-applications reached over HTTP.

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::Response,
    routing::any,
};
use serde_json::json;

use super::Mount;
use crate::error::AppError;
use crate::infrastructure::upstream::{MAX_FORWARDED_BODY, UpstreamClient, UpstreamError};

/// Forwards everything under its prefix to an external server.
pub struct UpstreamMount {
    name: &'static str,
    title: &'static str,
    prefix: &'static str,
    client: UpstreamClient,
}

impl UpstreamMount {
    /// Surface (Tempestas) API at `/surface`.
    pub fn surface(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        Self::new("surface", "Surface API", "/surface", base_url, timeout)
    }

    /// MCH API at `/mch`.
    pub fn mch(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        Self::new("mch", "MCH API", "/mch", base_url, timeout)
    }

    fn new(
        name: &'static str,
        title: &'static str,
        prefix: &'static str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        Ok(Self {
            name,
            title,
            prefix,
            client: UpstreamClient::new(base_url, prefix, timeout)?,
        })
    }
}

impl Mount for UpstreamMount {
    fn name(&self) -> &'static str {
        self.name
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn prefix(&self) -> &'static str {
        self.prefix
    }

    fn landing_path(&self) -> &'static str {
        self.prefix
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/", any(forward_handler))
            .route("/{*path}", any(forward_handler))
            .with_state(self.client.clone())
    }
}

async fn forward_handler(
    State(client): State<UpstreamClient>,
    request: Request,
) -> Result<Response<Body>, AppError> {
    client.forward(request).await.map_err(|e| match e {
        UpstreamError::BodyTooLarge(reason) => AppError::payload_too_large(
            "Request body too large to forward",
            json!({ "limit_bytes": MAX_FORWARDED_BODY, "reason": reason }),
        ),
        other => {
            tracing::warn!(error = %other, "Upstream request failed");
            AppError::bad_gateway(
                "Upstream application unavailable",
                json!({ "reason": other.to_string() }),
            )
        }
    })
}
