//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with per-collection status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each storage collection.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub businesses: CheckStatus,
    pub jobs: CheckStatus,
}

/// Individual collection health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
