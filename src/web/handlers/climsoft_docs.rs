//! Climsoft endpoint reference page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

#[derive(Debug, Clone)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    pub requires_auth: bool,
}

const fn endpoint(
    method: &'static str,
    path: &'static str,
    summary: &'static str,
    requires_auth: bool,
) -> EndpointDoc {
    EndpointDoc {
        method,
        path,
        summary,
        requires_auth,
    }
}

/// Paths are relative to `/climsoft`.
pub const CLIMSOFT_ENDPOINTS: &[EndpointDoc] = &[
    endpoint("POST", "/api/auth/v1/sign-in", "Exchange username and password for a bearer token", false),
    endpoint("GET", "/api/climsoft/v1/stations", "List stations (limit, offset)", true),
    endpoint("GET", "/api/climsoft/v1/stations/{station_id}", "Get one station", true),
    endpoint("GET", "/api/climsoft/v1/physical-feature-class", "List physical feature classes (limit, offset, refers_to)", true),
    endpoint("POST", "/api/climsoft/v1/physical-feature-class", "Create a physical feature class", true),
    endpoint("GET", "/api/climsoft/v1/physical-feature-class/{feature_class}", "Get one physical feature class", true),
    endpoint("PUT", "/api/climsoft/v1/physical-feature-class/{feature_class}", "Update description or station", true),
    endpoint("DELETE", "/api/climsoft/v1/physical-feature-class/{feature_class}", "Delete a physical feature class", true),
];

/// Template for the Climsoft reference page.
///
/// Renders `templates/climsoft_docs.html`.
#[derive(Template, WebTemplate)]
#[template(path = "climsoft_docs.html")]
pub struct ClimsoftDocsTemplate {
    pub prefix: &'static str,
    pub endpoints: Vec<EndpointDoc>,
}

/// Renders the Climsoft endpoint reference.
///
/// # Endpoint
///
/// `GET /climsoft/docs` (public)
pub async fn climsoft_docs_handler() -> impl IntoResponse {
    ClimsoftDocsTemplate {
        prefix: "/climsoft",
        endpoints: CLIMSOFT_ENDPOINTS.to_vec(),
    }
}
