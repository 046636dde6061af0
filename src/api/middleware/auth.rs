//! Bearer token authentication middleware.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::application::services::AuthService;
use crate::{error::AppError, state::AppState};

/// Guard state for one mounted sub-application.
///
/// `public_paths` are matched against the prefix-stripped path: an entry
/// matches itself and anything below it.
#[derive(Clone)]
pub struct MountGuard {
    pub auth_service: Arc<AuthService>,
    pub public_paths: &'static [&'static str],
}

impl MountGuard {
    fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|public| {
            path == *public
                || path
                    .strip_prefix(public)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

/// Authenticates requests to first-class gateway routes.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// On success the verified [`crate::infrastructure::security::Claims`] are
/// inserted into the request extensions, where
/// [`crate::api::extract::AuthClaims`] picks them up.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token signature, issuer or expiry does not check out
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/stations", get(stations_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let req = authenticate_request(&st.auth_service, req).await?;
    Ok(next.run(req).await)
}

/// Authenticates requests entering a mounted sub-application.
///
/// Public paths of the mount pass straight through. Everything else needs a
/// valid bearer token; the request, `Authorization` header included, is then
/// handed to the mount unchanged.
pub async fn mount_layer(
    State(guard): State<MountGuard>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if guard.is_public(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let req = authenticate_request(&guard.auth_service, req).await?;
    Ok(next.run(req).await)
}

async fn authenticate_request(auth: &AuthService, req: Request) -> Result<Request, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let claims = auth.authenticate(&token)?;
    parts.extensions.insert(claims);

    Ok(Request::from_parts(parts, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use crate::infrastructure::security::{PasswordHasher, TokenService};

    fn guard(public_paths: &'static [&'static str]) -> MountGuard {
        MountGuard {
            auth_service: Arc::new(AuthService::new(
                Arc::new(MockUserRepository::new()),
                PasswordHasher::new("k"),
                TokenService::new("k", 30),
            )),
            public_paths,
        }
    }

    #[test]
    fn test_public_path_matching() {
        let g = guard(&["/docs", "/api/auth/v1/sign-in"]);

        assert!(g.is_public("/docs"));
        assert!(g.is_public("/docs/openapi.json"));
        assert!(g.is_public("/api/auth/v1/sign-in"));
        assert!(!g.is_public("/docsx"));
        assert!(!g.is_public("/api/climsoft/v1/stations"));
        assert!(!g.is_public("/"));
    }

    #[test]
    fn test_no_public_paths() {
        assert!(!guard(&[]).is_public("/anything"));
    }
}
