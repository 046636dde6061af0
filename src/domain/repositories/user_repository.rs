//! Repository trait for gateway accounts.

use crate::domain::entities::{AuthUser, NewUser};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the auth store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds an account by its unique username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<AuthUser>, AppError>;

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<AuthUser, AppError>;

    /// Replaces the stored password hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_password(&self, id: i64, password_hash: &str) -> Result<(), AppError>;

    /// Activates or deactivates an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account does not exist.
    async fn set_active(&self, id: i64, is_active: bool) -> Result<(), AppError>;

    /// Stamps `last_login` with the current time.
    async fn touch_last_login(&self, id: i64) -> Result<(), AppError>;

    /// Lists all accounts ordered by id.
    async fn list(&self) -> Result<Vec<AuthUser>, AppError>;

    /// Permanently removes an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Round-trips to the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}
