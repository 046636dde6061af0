//! `GET /health` response shape.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: OverallStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// One probe per database the gateway reads.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub auth_database: DatabaseProbe,
    pub climsoft_database: DatabaseProbe,
}

#[derive(Debug, Serialize)]
pub struct DatabaseProbe {
    pub status: ProbeStatus,
    /// Round-trip time of the probe query.
    pub latency_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthChecks {
    pub fn overall(&self) -> OverallStatus {
        if self.auth_database.status == ProbeStatus::Ok
            && self.climsoft_database.status == ProbeStatus::Ok
        {
            OverallStatus::Healthy
        } else {
            OverallStatus::Degraded
        }
    }
}
