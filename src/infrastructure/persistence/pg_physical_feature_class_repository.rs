//! PostgreSQL implementation of the physical feature class repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    NewPhysicalFeatureClass, PhysicalFeatureClass, PhysicalFeatureClassPatch,
};
use crate::domain::repositories::{FeatureClassFilter, PhysicalFeatureClassRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct FeatureClassRow {
    feature_class: String,
    description: Option<String>,
    refers_to: Option<String>,
}

impl From<FeatureClassRow> for PhysicalFeatureClass {
    fn from(r: FeatureClassRow) -> Self {
        PhysicalFeatureClass {
            feature_class: r.feature_class,
            description: r.description,
            refers_to: r.refers_to,
        }
    }
}

/// PostgreSQL repository over the Climsoft `physicalfeatureclass` table.
///
/// `refers_to` is a foreign key to `station`; violations surface as
/// [`AppError::Validation`] through the `sqlx::Error` conversion.
pub struct PgPhysicalFeatureClassRepository {
    pool: Arc<PgPool>,
}

impl PgPhysicalFeatureClassRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhysicalFeatureClassRepository for PgPhysicalFeatureClassRepository {
    async fn list(&self, filter: FeatureClassFilter) -> Result<Vec<PhysicalFeatureClass>, AppError> {
        let rows = sqlx::query_as::<_, FeatureClassRow>(
            r#"
            SELECT feature_class, description, refers_to
            FROM physicalfeatureclass
            WHERE ($1::TEXT IS NULL OR refers_to = $1)
            ORDER BY feature_class
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(filter.refers_to)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PhysicalFeatureClass::from).collect())
    }

    async fn find(&self, feature_class: &str) -> Result<Option<PhysicalFeatureClass>, AppError> {
        let row = sqlx::query_as::<_, FeatureClassRow>(
            r#"
            SELECT feature_class, description, refers_to
            FROM physicalfeatureclass
            WHERE feature_class = $1
            "#,
        )
        .bind(feature_class)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(PhysicalFeatureClass::from))
    }

    async fn create(
        &self,
        new_class: NewPhysicalFeatureClass,
    ) -> Result<PhysicalFeatureClass, AppError> {
        let row = sqlx::query_as::<_, FeatureClassRow>(
            r#"
            INSERT INTO physicalfeatureclass (feature_class, description, refers_to)
            VALUES ($1, $2, $3)
            RETURNING feature_class, description, refers_to
            "#,
        )
        .bind(new_class.feature_class)
        .bind(new_class.description)
        .bind(new_class.refers_to)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        feature_class: &str,
        patch: PhysicalFeatureClassPatch,
    ) -> Result<PhysicalFeatureClass, AppError> {
        let update_description = patch.description.is_some();
        let new_description = patch.description.flatten();
        let update_refers_to = patch.refers_to.is_some();
        let new_refers_to = patch.refers_to.flatten();

        let row = sqlx::query_as::<_, FeatureClassRow>(
            r#"
            UPDATE physicalfeatureclass SET
                description = CASE WHEN $2 THEN $3::TEXT ELSE description END,
                refers_to   = CASE WHEN $4 THEN $5::TEXT ELSE refers_to END
            WHERE feature_class = $1
            RETURNING feature_class, description, refers_to
            "#,
        )
        .bind(feature_class)
        .bind(update_description)
        .bind(new_description)
        .bind(update_refers_to)
        .bind(new_refers_to)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(PhysicalFeatureClass::from).ok_or_else(|| {
            AppError::not_found(
                "Physical feature class not found",
                json!({ "feature_class": feature_class }),
            )
        })
    }

    async fn delete(&self, feature_class: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM physicalfeatureclass WHERE feature_class = $1")
            .bind(feature_class)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
