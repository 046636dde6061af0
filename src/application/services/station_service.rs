//! Read access to Climsoft stations.

use crate::domain::entities::Station;
use crate::domain::repositories::StationRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

pub struct StationService {
    repository: Arc<dyn StationRepository>,
}

impl StationService {
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self { repository }
    }

    /// Returns the full station table, ordered by `station_id`.
    pub async fn list_all(&self) -> Result<Vec<Station>, AppError> {
        self.repository.list_all().await
    }

    /// Returns one page of stations.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Station>, AppError> {
        self.repository.list(limit, offset).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no station has this id.
    pub async fn get(&self, station_id: &str) -> Result<Station, AppError> {
        self.repository
            .find_by_id(station_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Station not found", json!({ "station_id": station_id }))
            })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
