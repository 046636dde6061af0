//! Landing page handler.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

/// One enabled sub-application as shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// Template for the landing page.
///
/// Renders `templates/index.html` with a link per enabled mount.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct LandingTemplate {
    pub supported_apis: Vec<ApiLink>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler(State(apis): State<Arc<[ApiLink]>>) -> impl IntoResponse {
    LandingTemplate {
        supported_apis: apis.to_vec(),
    }
}
