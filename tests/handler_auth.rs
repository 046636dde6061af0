mod common;

use axum::http::{StatusCode, header};
use common::TestContext;
use opencdms_gateway::domain::repositories::UserRepository;
use opencdms_gateway::infrastructure::security::TokenService;
use serde_json::{Value, json};

#[tokio::test]
async fn test_sign_in_returns_bearer_token() {
    let ctx = TestContext::new();
    ctx.seed_user("observer", "observer-password").await;
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/sign-in")
        .form(&[("username", "observer"), ("password", "observer-password")])
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["expires_in"], 30 * 60);
    assert!(!json["access_token"].as_str().unwrap().is_empty());

    assert!(ctx.users.get("observer").unwrap().last_login.is_some());
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    let ctx = TestContext::new();
    ctx.seed_user("observer", "observer-password").await;
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/sign-in")
        .form(&[("username", "observer"), ("password", "nope")])
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.header(header::WWW_AUTHENTICATE), "Bearer");
    assert_eq!(response.json::<Value>()["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_sign_in_unknown_user_matches_wrong_password() {
    let ctx = TestContext::new();
    ctx.seed_user("observer", "observer-password").await;
    let server = ctx.server();

    let unknown = server
        .post("/api/auth/v1/sign-in")
        .form(&[("username", "ghost"), ("password", "observer-password")])
        .await;
    let wrong = server
        .post("/api/auth/v1/sign-in")
        .form(&[("username", "observer"), ("password", "nope")])
        .await;

    unknown.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.json::<Value>(), wrong.json::<Value>());
}

#[tokio::test]
async fn test_sign_in_inactive_user_forbidden() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("retired", "retired-password").await;
    ctx.users.set_active(user.id, false).await.unwrap();
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/sign-in")
        .form(&[("username", "retired"), ("password", "retired-password")])
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_sign_in_missing_field() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/sign-in")
        .form(&[("username", "observer")])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_climsoft_mount_sign_in_is_public() {
    let ctx = TestContext::new();
    ctx.seed_user("observer", "observer-password").await;
    let server = ctx.server();

    let response = server
        .post("/climsoft/api/auth/v1/sign-in")
        .form(&[("username", "observer"), ("password", "observer-password")])
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["token_type"], "bearer");
}

#[tokio::test]
async fn test_sign_up_creates_account() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/sign-up")
        .json(&json!({
            "username": "new.user",
            "password": "long-enough",
            "first_name": "New",
            "last_name": "User",
            "email": "new.user@example.org"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["username"], "new.user");
    assert_eq!(json["is_active"], true);
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());

    let stored = ctx.users.get("new.user").unwrap();
    assert_ne!(stored.password_hash, "long-enough");

    let sign_in = server
        .post("/api/auth/v1/sign-in")
        .form(&[("username", "new.user"), ("password", "long-enough")])
        .await;
    sign_in.assert_status_ok();
}

#[tokio::test]
async fn test_sign_up_duplicate_username() {
    let ctx = TestContext::new();
    ctx.seed_user("observer", "observer-password").await;
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/sign-up")
        .json(&json!({
            "username": "observer",
            "password": "long-enough",
            "email": "other@example.org"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(ctx.users.count(), 1);
}

#[tokio::test]
async fn test_sign_up_rejects_invalid_input() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/sign-up")
        .json(&json!({
            "username": "has spaces",
            "password": "short",
            "email": "not-an-email"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ctx.users.count(), 0);
}

#[tokio::test]
async fn test_change_password() {
    let ctx = TestContext::new();
    let token = ctx.token().await;
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/change-password")
        .authorization_bearer(&token)
        .json(&json!({
            "old_password": "observer-password",
            "new_password": "a-brand-new-password"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "result": [] }));

    server
        .post("/api/auth/v1/sign-in")
        .form(&[("username", "observer"), ("password", "observer-password")])
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .post("/api/auth/v1/sign-in")
        .form(&[("username", "observer"), ("password", "a-brand-new-password")])
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_change_password_wrong_old_password() {
    let ctx = TestContext::new();
    let token = ctx.token().await;
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/change-password")
        .authorization_bearer(&token)
        .json(&json!({
            "old_password": "not-it",
            "new_password": "a-brand-new-password"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password_requires_token() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/auth/v1/change-password")
        .json(&json!({
            "old_password": "observer-password",
            "new_password": "a-brand-new-password"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("observer", "observer-password").await;
    let foreign = TokenService::new("other", 30)
        .issue(&user)
        .unwrap()
        .token;
    let server = ctx.server();

    let response = server
        .get("/climsoft/api/climsoft/v1/stations")
        .authorization_bearer(&foreign)
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["reason"],
        "Invalid token"
    );
}
