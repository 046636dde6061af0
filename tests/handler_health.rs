mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["auth_database"]["status"], "ok");
    assert_eq!(json["checks"]["climsoft_database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let json = server.get("/health").await.json::<Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("auth_database").is_some());
    assert!(json["checks"].get("climsoft_database").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_climsoft_down() {
    let ctx = TestContext::new();
    ctx.stations.set_down(true);
    let server = ctx.server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["auth_database"]["status"], "ok");
    assert_eq!(json["checks"]["climsoft_database"]["status"], "error");
    assert!(json["checks"]["climsoft_database"]["message"].is_string());
}
