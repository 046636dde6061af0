//! Repository trait for physical feature classes.

use crate::domain::entities::{
    NewPhysicalFeatureClass, PhysicalFeatureClass, PhysicalFeatureClassPatch,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter and page for listing feature classes.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureClassFilter {
    pub refers_to: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// CRUD access to the Climsoft `physicalfeatureclass` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPhysicalFeatureClassRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhysicalFeatureClassRepository: Send + Sync {
    /// Lists feature classes ordered by `feature_class`.
    async fn list(&self, filter: FeatureClassFilter) -> Result<Vec<PhysicalFeatureClass>, AppError>;

    /// Finds a feature class by its code.
    async fn find(&self, feature_class: &str) -> Result<Option<PhysicalFeatureClass>, AppError>;

    /// Inserts a feature class.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Validation`] if `refers_to` names no station.
    async fn create(
        &self,
        new_class: NewPhysicalFeatureClass,
    ) -> Result<PhysicalFeatureClass, AppError>;

    /// Applies a partial update and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    async fn update(
        &self,
        feature_class: &str,
        patch: PhysicalFeatureClassPatch,
    ) -> Result<PhysicalFeatureClass, AppError>;

    /// Deletes a feature class.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    async fn delete(&self, feature_class: &str) -> Result<bool, AppError>;
}
