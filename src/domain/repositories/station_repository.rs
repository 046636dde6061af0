//! Repository trait for Climsoft stations.

use crate::domain::entities::Station;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the Climsoft `station` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Returns every station ordered by `station_id`.
    async fn list_all(&self) -> Result<Vec<Station>, AppError>;

    /// Returns one page of stations ordered by `station_id`.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Station>, AppError>;

    /// Finds a station by its identifier.
    async fn find_by_id(&self, station_id: &str) -> Result<Option<Station>, AppError>;

    /// Round-trips to the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}
