//! HTTP request/response tracing middleware.

use axum::{Router, body::Body, http::Request};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Wraps `router` in request tracing.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Opens an `INFO` span with the HTTP method, the path (query string left
///   out) and the area serving it (`gateway` or a mount name)
///
/// **On Response:**
/// - Logs at `INFO` level with status code and latency in milliseconds
/// - 5xx responses are additionally logged at `WARN`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET path=/climsoft/api/climsoft/v1/stations area=climsoft}: finished processing request latency=12 ms status=200
/// WARN request{method=GET path=/surface/api/v1/stations area=surface}: response failed classification=Status code: 502 Bad Gateway latency=3 ms
/// ```
pub fn apply(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(request_span)
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            )
            .on_failure(
                DefaultOnFailure::new()
                    .level(Level::WARN)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

fn request_span(request: &Request<Body>) -> Span {
    let path = request.uri().path();
    tracing::info_span!(
        "request",
        method = %request.method(),
        path,
        area = area(path),
    )
}

/// Names the part of the gateway that owns `path`.
fn area(path: &str) -> &'static str {
    match path.split('/').nth(1) {
        Some("climsoft") => "climsoft",
        Some("surface") => "surface",
        Some("mch") => "mch",
        _ => "gateway",
    }
}
