//! Liveness and database reachability.

use std::future::Future;
use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    DatabaseProbe, HealthChecks, HealthResponse, OverallStatus, ProbeStatus,
};
use crate::error::AppError;
use crate::state::AppState;

/// Probes the auth and Climsoft databases concurrently.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// - **200 OK**: Both databases reachable
/// - **503 Service Unavailable**: At least one probe failed; the body is the
///   same shape with the failing probe's `message` set
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "auth_database": { "status": "ok", "latency_ms": 1 },
///     "climsoft_database": { "status": "ok", "latency_ms": 2 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let (auth_database, climsoft_database) = tokio::join!(
        probe(state.auth_service.health_check()),
        probe(state.station_service.health_check()),
    );

    let checks = HealthChecks {
        auth_database,
        climsoft_database,
    };
    let status = checks.overall();

    let code = match status {
        OverallStatus::Healthy => StatusCode::OK,
        OverallStatus::Degraded => {
            tracing::warn!(?checks, "Health check degraded");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }),
    )
}

async fn probe(check: impl Future<Output = Result<(), AppError>>) -> DatabaseProbe {
    let started = Instant::now();
    let result = check.await;
    let latency_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(()) => DatabaseProbe {
            status: ProbeStatus::Ok,
            latency_ms,
            message: None,
        },
        Err(e) => DatabaseProbe {
            status: ProbeStatus::Error,
            latency_ms,
            message: Some(e.to_string()),
        },
    }
}
