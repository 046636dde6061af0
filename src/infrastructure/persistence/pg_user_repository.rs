//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AuthUser, NewUser};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

const USER_COLUMNS: &str =
    "id, username, password, first_name, last_name, email, is_active, date_joined, last_login";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    email: String,
    is_active: bool,
    date_joined: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
}

impl From<UserRow> for AuthUser {
    fn from(r: UserRow) -> Self {
        AuthUser {
            id: r.id,
            username: r.username,
            password_hash: r.password,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            is_active: r.is_active,
            date_joined: r.date_joined,
            last_login: r.last_login,
        }
    }
}

/// PostgreSQL repository for the `auth_user` table.
///
/// Only password hashes are stored; raw passwords never reach this layer.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn ensure_affected(rows: u64, id: i64) -> Result<(), AppError> {
    if rows == 0 {
        return Err(AppError::not_found("User not found", json!({ "id": id })));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AuthUser>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM auth_user WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(AuthUser::from))
    }

    async fn create(&self, new_user: NewUser) -> Result<AuthUser, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO auth_user (username, password, first_name, last_name, email, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(new_user.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn set_password(&self, id: i64, password_hash: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE auth_user SET password = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(self.pool.as_ref())
            .await?;

        ensure_affected(result.rows_affected(), id)
    }

    async fn set_active(&self, id: i64, is_active: bool) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE auth_user SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(is_active)
            .execute(self.pool.as_ref())
            .await?;

        ensure_affected(result.rows_affected(), id)
    }

    async fn touch_last_login(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE auth_user SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<AuthUser>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM auth_user ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(AuthUser::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM auth_user WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        ensure_affected(result.rows_affected(), id)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
