//! Top-level router: gateway routes plus every enabled mount.
//!
//! # Route Structure
//!
//! - `GET  /`                       - Landing page listing enabled mounts (public)
//! - `GET  /health`                 - Database probes (public)
//! - `GET  /stations`               - Every Climsoft station (public unless configured)
//! - `POST /api/auth/v1/sign-in`    - Token issuance (public, rate limited)
//! - `POST /api/auth/v1/sign-up`    - Registration (public, rate limited)
//! - `POST /api/auth/v1/change-password` - Bearer token required
//! - `/{mount}/*`                   - Mounted sub-applications behind the mount guard
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on credential routes
//! - **Authentication** - Bearer token (route guard and mount guard)

use crate::api;
use crate::api::handlers::{all_stations_handler, health_handler};
use crate::api::middleware::auth::{self, MountGuard};
use crate::api::middleware::rate_limit::RateLimit;
use crate::api::middleware::tracing;
use crate::mounts::Mount;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::ApiLink;
use axum::routing::get;
use axum::{Router, middleware};

/// Knobs for [`app_router`] that are not part of [`AppState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    /// Put `GET /stations` behind the bearer check.
    pub stations_require_auth: bool,
    pub sign_in_rate_limit: RateLimit,
}

/// Constructs the gateway router with all routes, mounts and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into gateway handlers
/// - `mounts` - enabled sub-applications; each is nested at its prefix with
///   the prefix stripped, and wrapped in the mount guard
/// - `options` - see [`RouterOptions`]
pub fn app_router(state: AppState, mounts: &[Box<dyn Mount>], options: RouterOptions) -> Router {
    let require_auth = middleware::from_fn_with_state(state.clone(), auth::layer);

    let auth_router = api::routes::credential_routes(options.sign_in_rate_limit)
        .merge(api::routes::account_routes().route_layer(require_auth.clone()));

    let stations_router = Router::new().route("/stations", get(all_stations_handler));
    let stations_router = if options.stations_require_auth {
        stations_router.route_layer(require_auth)
    } else {
        stations_router
    };

    let supported_apis = mounts
        .iter()
        .map(|m| ApiLink {
            title: m.title(),
            url: m.landing_path(),
        })
        .collect();

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .merge(stations_router)
        .nest("/api/auth/v1", auth_router)
        .with_state(state.clone())
        .merge(web::routes::landing_routes(supported_apis));

    for mount in mounts {
        let guard = MountGuard {
            auth_service: state.auth_service.clone(),
            public_paths: mount.public_paths(),
        };

        let guarded = mount
            .router()
            .layer(middleware::from_fn_with_state(guard, auth::mount_layer));

        router = router.nest(mount.prefix(), guarded);
        ::tracing::info!(mount = mount.name(), prefix = mount.prefix(), "Sub-application mounted");
    }

    tracing::apply(router)
}
