//! Handlers for station reads.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::ResultResponse;
use crate::api::dto::pagination::LimitParams;
use crate::api::dto::station::StationItem;
use crate::api::extract::ApiQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns every station as a bare JSON array.
///
/// # Endpoint
///
/// `GET /stations`
pub async fn all_stations_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationItem>>, AppError> {
    let stations = state.station_service.list_all().await?;
    Ok(Json(stations.into_iter().map(StationItem::from).collect()))
}

/// # Endpoint
///
/// `GET /api/climsoft/v1/stations?limit=&offset=`
pub async fn list_stations_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<Json<ResultResponse<StationItem>>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::validation(e, serde_json::json!({ "field": "limit" })))?;

    let stations = state.station_service.list(limit, offset).await?;

    Ok(Json(ResultResponse::many(
        stations.into_iter().map(StationItem::from).collect(),
    )))
}

/// # Endpoint
///
/// `GET /api/climsoft/v1/stations/{station_id}`
pub async fn get_station_handler(
    Path(station_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResultResponse<StationItem>>, AppError> {
    let station = state.station_service.get(&station_id).await?;
    Ok(Json(ResultResponse::one(station.into())))
}
