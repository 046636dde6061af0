//! PostgreSQL implementation of the station repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Station;
use crate::domain::repositories::StationRepository;
use crate::error::AppError;

const STATION_COLUMNS: &str = r#"
    station_id, station_name, wmoid, icaoid, latitude, qualifier, longitude, elevation,
    geolocation_method, geolocation_accuracy, opening_datetime, closing_datetime, country,
    authority, admin_region, drainage_basin, waca_selection, cpt_selection, station_operational
"#;

#[derive(sqlx::FromRow)]
struct StationRow {
    station_id: String,
    station_name: Option<String>,
    wmoid: Option<String>,
    icaoid: Option<String>,
    latitude: Option<f64>,
    qualifier: Option<String>,
    longitude: Option<f64>,
    elevation: Option<String>,
    geolocation_method: Option<String>,
    geolocation_accuracy: Option<f64>,
    opening_datetime: Option<String>,
    closing_datetime: Option<String>,
    country: Option<String>,
    authority: Option<String>,
    admin_region: Option<String>,
    drainage_basin: Option<String>,
    waca_selection: bool,
    cpt_selection: bool,
    station_operational: bool,
}

impl From<StationRow> for Station {
    fn from(r: StationRow) -> Self {
        Station {
            station_id: r.station_id,
            station_name: r.station_name,
            wmoid: r.wmoid,
            icaoid: r.icaoid,
            latitude: r.latitude,
            qualifier: r.qualifier,
            longitude: r.longitude,
            elevation: r.elevation,
            geolocation_method: r.geolocation_method,
            geolocation_accuracy: r.geolocation_accuracy,
            opening_datetime: r.opening_datetime,
            closing_datetime: r.closing_datetime,
            country: r.country,
            authority: r.authority,
            admin_region: r.admin_region,
            drainage_basin: r.drainage_basin,
            waca_selection: r.waca_selection,
            cpt_selection: r.cpt_selection,
            station_operational: r.station_operational,
        }
    }
}

/// PostgreSQL repository over the Climsoft `station` table.
pub struct PgStationRepository {
    pool: Arc<PgPool>,
}

impl PgStationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StationRepository for PgStationRepository {
    async fn list_all(&self) -> Result<Vec<Station>, AppError> {
        let rows = sqlx::query_as::<_, StationRow>(&format!(
            "SELECT {STATION_COLUMNS} FROM station ORDER BY station_id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Station::from).collect())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Station>, AppError> {
        let rows = sqlx::query_as::<_, StationRow>(&format!(
            "SELECT {STATION_COLUMNS} FROM station ORDER BY station_id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Station::from).collect())
    }

    async fn find_by_id(&self, station_id: &str) -> Result<Option<Station>, AppError> {
        let row = sqlx::query_as::<_, StationRow>(&format!(
            "SELECT {STATION_COLUMNS} FROM station WHERE station_id = $1"
        ))
        .bind(station_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Station::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
