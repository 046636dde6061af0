//! Climsoft API served in-process.

use axum::{
    Router,
    routing::{get, post},
};

use super::Mount;
use crate::api::handlers::sign_in_handler;
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::api::routes::climsoft_routes;
use crate::state::AppState;
use crate::web::handlers::climsoft_docs_handler;

/// Climsoft sub-application mounted at `/climsoft`.
///
/// # Endpoints (relative to the prefix)
///
/// - `POST /api/auth/v1/sign-in`  - Public sign-in, same as the gateway's
/// - `GET  /docs`                 - Public endpoint reference
/// - `/api/climsoft/v1/*`         - Station and feature class routes
pub struct ClimsoftMount {
    state: AppState,
    sign_in_rate_limit: RateLimit,
}

impl ClimsoftMount {
    pub fn new(state: AppState, sign_in_rate_limit: RateLimit) -> Self {
        Self {
            state,
            sign_in_rate_limit,
        }
    }
}

impl Mount for ClimsoftMount {
    fn name(&self) -> &'static str {
        "climsoft"
    }

    fn title(&self) -> &'static str {
        "Climsoft API"
    }

    fn prefix(&self) -> &'static str {
        "/climsoft"
    }

    fn landing_path(&self) -> &'static str {
        "/climsoft/docs"
    }

    fn public_paths(&self) -> &'static [&'static str] {
        &["/docs", "/api/auth/v1/sign-in"]
    }

    fn router(&self) -> Router {
        let sign_in = rate_limit::apply(
            Router::new().route("/api/auth/v1/sign-in", post(sign_in_handler)),
            self.sign_in_rate_limit,
        );

        Router::new()
            .route("/docs", get(climsoft_docs_handler))
            .merge(sign_in)
            .nest("/api/climsoft/v1", climsoft_routes())
            .with_state(self.state.clone())
    }
}
