//! Physical feature class CRUD.

use crate::domain::entities::{
    NewPhysicalFeatureClass, PhysicalFeatureClass, PhysicalFeatureClassPatch,
};
use crate::domain::repositories::{
    FeatureClassFilter, PhysicalFeatureClassRepository, StationRepository,
};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// CRUD over physical feature classes.
///
/// Station references are checked here before the write so a dangling
/// `refers_to` surfaces as a field-level validation error instead of a raw
/// foreign-key failure. The constraint still backs this up under races.
pub struct PhysicalFeatureClassService {
    repository: Arc<dyn PhysicalFeatureClassRepository>,
    stations: Arc<dyn StationRepository>,
}

impl PhysicalFeatureClassService {
    pub fn new(
        repository: Arc<dyn PhysicalFeatureClassRepository>,
        stations: Arc<dyn StationRepository>,
    ) -> Self {
        Self {
            repository,
            stations,
        }
    }

    /// Lists feature classes ordered by code.
    pub async fn list(
        &self,
        filter: FeatureClassFilter,
    ) -> Result<Vec<PhysicalFeatureClass>, AppError> {
        self.repository.list(filter).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn get(&self, feature_class: &str) -> Result<PhysicalFeatureClass, AppError> {
        self.repository
            .find(feature_class)
            .await?
            .ok_or_else(|| not_found(feature_class))
    }

    /// Creates a feature class.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `refers_to` names no station.
    /// Returns [`AppError::Conflict`] if the code is already taken.
    pub async fn create(
        &self,
        new_class: NewPhysicalFeatureClass,
    ) -> Result<PhysicalFeatureClass, AppError> {
        if let Some(station_id) = &new_class.refers_to {
            self.ensure_station(station_id).await?;
        }

        if self.repository.find(&new_class.feature_class).await?.is_some() {
            return Err(AppError::conflict(
                "Physical feature class already exists",
                json!({ "feature_class": new_class.feature_class }),
            ));
        }

        let created = self.repository.create(new_class).await?;
        tracing::info!(feature_class = %created.feature_class, "Physical feature class created");
        Ok(created)
    }

    /// Applies a partial update.
    ///
    /// An empty patch returns the stored row untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    /// Returns [`AppError::Validation`] if the new `refers_to` names no station.
    pub async fn update(
        &self,
        feature_class: &str,
        patch: PhysicalFeatureClassPatch,
    ) -> Result<PhysicalFeatureClass, AppError> {
        if patch.is_empty() {
            return self.get(feature_class).await;
        }

        if let Some(Some(station_id)) = &patch.refers_to {
            self.ensure_station(station_id).await?;
        }

        self.repository.update(feature_class, patch).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn delete(&self, feature_class: &str) -> Result<(), AppError> {
        if !self.repository.delete(feature_class).await? {
            return Err(not_found(feature_class));
        }

        tracing::info!(feature_class, "Physical feature class deleted");
        Ok(())
    }

    async fn ensure_station(&self, station_id: &str) -> Result<(), AppError> {
        if self.stations.find_by_id(station_id).await?.is_none() {
            return Err(AppError::validation(
                "Referenced station does not exist",
                json!({ "field": "refers_to", "station_id": station_id }),
            ));
        }
        Ok(())
    }
}

fn not_found(feature_class: &str) -> AppError {
    AppError::not_found(
        "Physical feature class not found",
        json!({ "feature_class": feature_class }),
    )
}
