//! Reverse-proxy client for externally hosted sub-applications.

use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Request, Response, header};
use std::time::Duration;
use url::Url;

/// Largest request body forwarded upstream.
pub const MAX_FORWARDED_BODY: usize = 32 * 1024 * 1024;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid upstream URL '{0}'")]
    InvalidUrl(String),
    #[error("request body exceeds {MAX_FORWARDED_BODY} bytes: {0}")]
    BodyTooLarge(String),
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid upstream response: {0}")]
    Response(String),
}

/// Forwards requests to one upstream base URL.
///
/// The caller hands over a request whose URI has already had the mount
/// prefix stripped; that path and query are appended to the base URL.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    prefix: &'static str,
}

impl UpstreamClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::InvalidUrl`] unless `base_url` is an absolute
    /// `http`/`https` URL.
    pub fn new(
        base_url: &str,
        prefix: &'static str,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let parsed =
            Url::parse(base_url).map_err(|_| UpstreamError::InvalidUrl(base_url.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(UpstreamError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .tcp_keepalive(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(90))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            prefix,
        })
    }

    /// Builds the upstream URL for a prefix-stripped path and query.
    pub fn target_url(&self, path_and_query: &str) -> String {
        if path_and_query.starts_with('/') {
            format!("{}{}", self.base_url, path_and_query)
        } else {
            format!("{}/{}", self.base_url, path_and_query)
        }
    }

    /// Sends `request` upstream and returns the upstream response verbatim,
    /// minus connection-level headers.
    ///
    /// The upstream `Content-Length` is kept as sent, so `HEAD` replies
    /// report the size of the resource rather than of the empty body.
    pub async fn forward(&self, request: Request<Body>) -> Result<Response<Body>, UpstreamError> {
        let (parts, body) = request.into_parts();

        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = self.target_url(path_and_query);

        let body = to_bytes(body, MAX_FORWARDED_BODY)
            .await
            .map_err(|e| UpstreamError::BodyTooLarge(e.to_string()))?;

        let mut headers = strip_hop_by_hop(parts.headers);
        headers.remove(header::HOST);
        // reqwest sets it from the buffered body
        headers.remove(header::CONTENT_LENGTH);
        headers.insert(
            HeaderName::from_static("x-forwarded-prefix"),
            HeaderValue::from_static(self.prefix),
        );

        tracing::debug!(method = %parts.method, %url, "Forwarding request upstream");

        let upstream = self
            .client
            .request(parts.method, &url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = upstream.status();
        let headers = strip_hop_by_hop(upstream.headers().clone());
        let bytes = upstream.bytes().await?;

        let mut response = Response::builder()
            .status(status)
            .body(Body::from(bytes))
            .map_err(|e| UpstreamError::Response(e.to_string()))?;
        *response.headers_mut() = headers;

        Ok(response)
    }
}

fn strip_hop_by_hop(mut headers: HeaderMap) -> HeaderMap {
    for name in HOP_BY_HOP.iter() {
        headers.remove(name);
    }
    headers
}
