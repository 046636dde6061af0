//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Sustained rate, one token replenished every N seconds.
const REPLENISH_SECONDS: u64 = 2;
/// Requests allowed in a burst before throttling starts.
const BURST_SIZE: u32 = 10;

/// Where the limiter takes the client key from, if it runs at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateLimit {
    #[default]
    Disabled,
    /// Socket peer address.
    PeerIp,
    /// `X-Forwarded-For`, `X-Real-IP` or `Forwarded`, falling back to the
    /// peer address. Only safe behind a trusted reverse proxy.
    ForwardedIp,
}

impl RateLimit {
    pub fn from_flags(enabled: bool, behind_proxy: bool) -> Self {
        match (enabled, behind_proxy) {
            (false, _) => RateLimit::Disabled,
            (true, false) => RateLimit::PeerIp,
            (true, true) => RateLimit::ForwardedIp,
        }
    }
}

/// Applies the per-IP limiter for credential endpoints to `router`.
///
/// # Limits
///
/// - **Rate**: 1 request every 2 seconds
/// - **Burst**: 10 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// See [`RateLimit`]. Both keyed modes need the server to be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let credentials = Router::new()
///     .route("/sign-in", post(sign_in_handler));
/// let credentials = rate_limit::apply(credentials, RateLimit::PeerIp);
/// ```
pub fn apply<S>(router: Router<S>, mode: RateLimit) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    match mode {
        RateLimit::Disabled => router,
        RateLimit::ForwardedIp => {
            let governor_conf = Arc::new(
                GovernorConfigBuilder::default()
                    .key_extractor(SmartIpKeyExtractor)
                    .per_second(REPLENISH_SECONDS)
                    .burst_size(BURST_SIZE)
                    .finish()
                    .expect("rate limit quota is non-zero"),
            );
            router.layer(GovernorLayer::new(governor_conf))
        }
        RateLimit::PeerIp => {
            let governor_conf = Arc::new(
                GovernorConfigBuilder::default()
                    .key_extractor(PeerIpKeyExtractor)
                    .per_second(REPLENISH_SECONDS)
                    .burst_size(BURST_SIZE)
                    .finish()
                    .expect("rate limit quota is non-zero"),
            );
            router.layer(GovernorLayer::new(governor_conf))
        }
    }
}
