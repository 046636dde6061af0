//! Web page route configuration.

use std::sync::Arc;

use crate::web::handlers::{ApiLink, landing_handler};
use axum::{Router, routing::get};

/// Landing page listing the enabled sub-applications, in the given order.
///
/// # Endpoints
///
/// - `GET /` - Landing page
pub fn landing_routes(supported_apis: Vec<ApiLink>) -> Router {
    let apis: Arc<[ApiLink]> = supported_apis.into();

    Router::new()
        .route("/", get(landing_handler))
        .with_state(apis)
}
