//! Handlers for the auth endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::ResultResponse;
use crate::api::dto::auth::{
    ChangePasswordRequest, SignInForm, SignUpRequest, TokenResponse, UserItem,
};
use crate::api::extract::{ApiForm, ApiJson, AuthClaims};
use crate::application::services::Registration;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges a username and password for an access token.
///
/// # Endpoint
///
/// `POST /api/auth/v1/sign-in` (form-encoded `username`, `password`, `scope`)
///
/// # Errors
///
/// Returns 401 for an unknown user or wrong password.
/// Returns 403 for an inactive account.
pub async fn sign_in_handler(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<SignInForm>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state
        .auth_service
        .sign_in(&form.username, &form.password)
        .await?;

    Ok(Json(token.into()))
}

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/auth/v1/sign-up`
///
/// # Errors
///
/// Returns 422 if a field fails validation.
/// Returns 409 if the username is taken.
pub async fn sign_up_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SignUpRequest>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    payload.validate()?;

    let user = state
        .auth_service
        .sign_up(Registration {
            username: payload.username,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Changes the caller's password.
///
/// # Endpoint
///
/// `POST /api/auth/v1/change-password` (bearer token required)
pub async fn change_password_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    ApiJson(payload): ApiJson<ChangePasswordRequest>,
) -> Result<Json<ResultResponse<UserItem>>, AppError> {
    payload.validate()?;

    state
        .auth_service
        .change_password(&claims.sub, &payload.old_password, payload.new_password)
        .await?;

    Ok(Json(ResultResponse::empty()))
}
