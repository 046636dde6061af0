//! Startup provisioning of the default administrator account.

use std::sync::Arc;

use crate::domain::entities::NewUser;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::security::PasswordHasher;
use serde_json::json;

const DEFAULT_FIRST_NAME: &str = "Default";
const DEFAULT_LAST_NAME: &str = "User";
const DEFAULT_EMAIL: &str = "admin@opencdms_api.com";

/// Credentials of the account guaranteed to exist after startup.
#[derive(Debug, Clone)]
pub struct DefaultUser {
    pub username: String,
    pub password: String,
    /// Overwrite the stored password when it differs from `password`.
    pub reset_password: bool,
}

/// What [`BootstrapService::ensure_default_user`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created,
    PasswordReset,
    Unchanged,
}

pub struct BootstrapService {
    repository: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl BootstrapService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { repository, hasher }
    }

    /// Makes sure the default account exists with the configured password.
    ///
    /// Safe to run on every start: an existing account is left alone unless
    /// its password no longer matches and `reset_password` is set.
    ///
    /// # Errors
    ///
    /// Any repository or hashing failure is returned as-is so the caller can
    /// abort startup.
    pub async fn ensure_default_user(
        &self,
        default_user: &DefaultUser,
    ) -> Result<BootstrapOutcome, AppError> {
        let existing = self
            .repository
            .find_by_username(&default_user.username)
            .await?;

        let outcome = match existing {
            None => {
                let password_hash = self.hash(&default_user.password).await?;
                self.repository
                    .create(NewUser {
                        username: default_user.username.clone(),
                        password_hash,
                        first_name: DEFAULT_FIRST_NAME.to_string(),
                        last_name: DEFAULT_LAST_NAME.to_string(),
                        email: DEFAULT_EMAIL.to_string(),
                        is_active: true,
                    })
                    .await?;
                BootstrapOutcome::Created
            }
            Some(_) if !default_user.reset_password => BootstrapOutcome::Unchanged,
            Some(user) => {
                // An unparseable stored hash counts as a mismatch.
                let matches = self
                    .hasher
                    .verify(&default_user.password, &user.password_hash)
                    .unwrap_or(false);

                if matches {
                    BootstrapOutcome::Unchanged
                } else {
                    let password_hash = self.hash(&default_user.password).await?;
                    self.repository
                        .set_password(user.id, &password_hash)
                        .await?;
                    BootstrapOutcome::PasswordReset
                }
            }
        };

        tracing::info!(
            username = %default_user.username,
            outcome = ?outcome,
            "Default user ensured"
        );

        Ok(outcome)
    }

    async fn hash(&self, password: &str) -> Result<String, AppError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))?
            .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))
    }
}
