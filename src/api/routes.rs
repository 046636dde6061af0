//! API route groups.
//!
//! Groups are returned unlayered except for rate limiting; the caller
//! decides which guard wraps them.

use crate::api::handlers::{
    change_password_handler, create_feature_class_handler, delete_feature_class_handler,
    get_feature_class_handler, get_station_handler, list_feature_classes_handler,
    list_stations_handler, sign_in_handler, sign_up_handler, update_feature_class_handler,
};
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public credential routes, nested at `/api/auth/v1`.
///
/// # Endpoints
///
/// - `POST /sign-in`  - Exchange username and password for a token
/// - `POST /sign-up`  - Register an account
pub fn credential_routes(limit: RateLimit) -> Router<AppState> {
    let router = Router::new()
        .route("/sign-in", post(sign_in_handler))
        .route("/sign-up", post(sign_up_handler));

    rate_limit::apply(router, limit)
}

/// Account routes needing a bearer token, nested at `/api/auth/v1`.
///
/// # Endpoints
///
/// - `POST /change-password` - Replace the caller's password
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/change-password", post(change_password_handler))
}

/// Climsoft API routes, nested at `/api/climsoft/v1` inside the Climsoft mount.
///
/// # Endpoints
///
/// - `GET    /stations`                              - Page through stations
/// - `GET    /stations/{station_id}`                 - One station
/// - `GET    /physical-feature-class`                - Page through feature classes
/// - `POST   /physical-feature-class`                - Create a feature class
/// - `GET    /physical-feature-class/{feature_class}` - One feature class
/// - `PUT    /physical-feature-class/{feature_class}` - Partially update
/// - `DELETE /physical-feature-class/{feature_class}` - Delete
pub fn climsoft_routes() -> Router<AppState> {
    Router::new()
        .route("/stations", get(list_stations_handler))
        .route("/stations/{station_id}", get(get_station_handler))
        .route(
            "/physical-feature-class",
            get(list_feature_classes_handler).post(create_feature_class_handler),
        )
        .route(
            "/physical-feature-class/{feature_class}",
            get(get_feature_class_handler)
                .put(update_feature_class_handler)
                .delete(delete_feature_class_handler),
        )
}
