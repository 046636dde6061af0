//! Handlers for physical feature class CRUD.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::ResultResponse;
use crate::api::dto::pagination::FeatureClassQuery;
use crate::api::dto::physical_feature_class::{
    CreatePhysicalFeatureClassRequest, PhysicalFeatureClassItem,
    UpdatePhysicalFeatureClassRequest,
};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::domain::repositories::FeatureClassFilter;
use crate::error::AppError;
use crate::state::AppState;

type Envelope = Json<ResultResponse<PhysicalFeatureClassItem>>;

/// Lists feature classes.
///
/// # Endpoint
///
/// `GET /api/climsoft/v1/physical-feature-class?limit=&offset=&refers_to=`
///
/// # Errors
///
/// Returns 422 if `limit` is outside `1..=1000` or not a number.
pub async fn list_feature_classes_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FeatureClassQuery>,
) -> Result<Envelope, AppError> {
    let (offset, limit) = query
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::validation(e, json!({ "field": "limit" })))?;

    let classes = state
        .feature_class_service
        .list(FeatureClassFilter {
            refers_to: query.refers_to,
            limit,
            offset,
        })
        .await?;

    Ok(Json(ResultResponse::many(
        classes.into_iter().map(Into::into).collect(),
    )))
}

/// # Endpoint
///
/// `GET /api/climsoft/v1/physical-feature-class/{feature_class}`
///
/// # Errors
///
/// Returns 404 for an unknown code.
pub async fn get_feature_class_handler(
    Path(feature_class): Path<String>,
    State(state): State<AppState>,
) -> Result<Envelope, AppError> {
    let class = state.feature_class_service.get(&feature_class).await?;
    Ok(Json(ResultResponse::one(class.into())))
}

/// Creates a feature class and echoes it back.
///
/// # Endpoint
///
/// `POST /api/climsoft/v1/physical-feature-class`
///
/// # Errors
///
/// Returns 422 for a missing or invalid field, or an unknown `refers_to`.
/// Returns 409 if the code already exists.
pub async fn create_feature_class_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreatePhysicalFeatureClassRequest>,
) -> Result<Envelope, AppError> {
    payload.validate()?;

    let class = state.feature_class_service.create(payload.into()).await?;
    Ok(Json(ResultResponse::one(class.into())))
}

/// Partially updates a feature class.
///
/// # Endpoint
///
/// `PUT /api/climsoft/v1/physical-feature-class/{feature_class}`
///
/// Absent fields are left unchanged; `null` clears a column.
///
/// # Errors
///
/// Returns 404 for an unknown code.
/// Returns 422 for an invalid field or unknown `refers_to`.
pub async fn update_feature_class_handler(
    Path(feature_class): Path<String>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdatePhysicalFeatureClassRequest>,
) -> Result<Envelope, AppError> {
    payload.validate()?;

    let class = state
        .feature_class_service
        .update(&feature_class, payload.into())
        .await?;

    Ok(Json(ResultResponse::one(class.into())))
}

/// # Endpoint
///
/// `DELETE /api/climsoft/v1/physical-feature-class/{feature_class}`
///
/// Responds with an empty envelope.
///
/// # Errors
///
/// Returns 404 for an unknown code.
pub async fn delete_feature_class_handler(
    Path(feature_class): Path<String>,
    State(state): State<AppState>,
) -> Result<Envelope, AppError> {
    state.feature_class_service.delete(&feature_class).await?;
    Ok(Json(ResultResponse::empty()))
}
