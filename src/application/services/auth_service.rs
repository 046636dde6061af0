//! Authentication service: sign-in, sign-up, password change and bearer
//! token validation.

use std::sync::Arc;

use crate::domain::entities::{AuthUser, NewUser};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::security::{
    Claims, IssuedToken, PasswordError, PasswordHasher, TokenError, TokenService,
};
use serde_json::json;

/// Account details submitted at sign-up.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Service for authenticating gateway users.
///
/// Passwords are verified against keyed Argon2id hashes; successful sign-in
/// yields a signed access token that [`Self::authenticate`] later checks
/// without touching the database.
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: PasswordHasher,
        tokens: TokenService,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Checks credentials and issues an access token.
    ///
    /// On success, stamps `last_login` for the account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the username is unknown or the
    /// password does not match. Both cases pay for one Argon2 verification.
    /// Returns [`AppError::Forbidden`] if the account is inactive.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            self.verify_decoy(password).await;
            tracing::debug!(username, "Sign-in rejected: unknown user");
            return Err(bad_credentials());
        };

        if !self.verify_password(password, &user).await? {
            tracing::debug!(username, "Sign-in rejected: wrong password");
            return Err(bad_credentials());
        }

        if !user.is_active {
            return Err(AppError::forbidden(
                "Inactive user",
                json!({ "username": username }),
            ));
        }

        if let Err(e) = self.repository.touch_last_login(user.id).await {
            tracing::warn!(error = %e, user_id = user.id, "Failed to record last login");
        }

        let token = self.tokens.issue(&user).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            AppError::internal("Failed to issue access token", json!({}))
        })?;

        tracing::info!(username, "User signed in");
        Ok(token)
    }

    /// Registers a new, active account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    pub async fn sign_up(&self, registration: Registration) -> Result<AuthUser, AppError> {
        if self
            .repository
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Username already exists",
                json!({ "username": registration.username }),
            ));
        }

        let password_hash = self.hash_password(registration.password).await?;

        let user = self
            .repository
            .create(NewUser {
                username: registration.username,
                password_hash,
                first_name: registration.first_name,
                last_name: registration.last_name,
                email: registration.email,
                is_active: true,
            })
            .await?;

        tracing::info!(username = %user.username, "User registered");
        Ok(user)
    }

    /// Replaces a user's password after checking the current one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if `old_password` does not match or
    /// the account no longer exists.
    pub async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: String,
    ) -> Result<(), AppError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(bad_credentials)?;

        if !self.verify_password(old_password, &user).await? {
            return Err(bad_credentials());
        }

        let password_hash = self.hash_password(new_password).await?;
        self.repository.set_password(user.id, &password_hash).await?;

        tracing::info!(username, "Password changed");
        Ok(())
    }

    /// Validates a bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, wrongly
    /// signed or expired.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        self.tokens.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            let reason = match e {
                TokenError::Expired => "Token has expired",
                _ => "Invalid token",
            };
            AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
        })
    }

    /// Checks the auth database is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn verify_password(&self, password: &str, user: &AuthUser) -> Result<bool, AppError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let hash = user.password_hash.clone();

        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AppError::internal("Password check failed", json!({ "reason": e.to_string() })))?;

        match verified {
            Ok(matches) => Ok(matches),
            Err(PasswordError::InvalidHash) => {
                tracing::warn!(user_id = user.id, "Stored password hash is malformed");
                Ok(false)
            }
            Err(e) => Err(AppError::internal(
                "Password check failed",
                json!({ "reason": e.to_string() }),
            )),
        }
    }

    async fn verify_decoy(&self, password: &str) {
        let hasher = self.hasher.clone();
        let password = password.to_string();

        if let Err(e) = tokio::task::spawn_blocking(move || hasher.verify_decoy(&password)).await {
            tracing::warn!(error = %e, "Decoy password check failed");
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, AppError> {
        let hasher = self.hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))?
            .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))
    }
}

fn bad_credentials() -> AppError {
    AppError::unauthorized(
        "Incorrect username or password",
        json!({ "reason": "Invalid credentials" }),
    )
}
