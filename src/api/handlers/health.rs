//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with per-collection record counts.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All collections readable
/// - **503 Service Unavailable**: A storage lock is poisoned
///
/// Storage is in-process, so the only failure mode a probe can surface is a
/// poisoned collection lock.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "businesses": { "status": "ok", "message": "1 record(s)" },
///     "jobs": { "status": "ok", "message": "0 record(s)" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let business_check = match state.business_service.count_businesses().await {
        Ok(count) => ok_status(count),
        Err(e) => error_status(&e),
    };

    let job_check = match state.job_service.count_jobs().await {
        Ok(count) => ok_status(count),
        Err(e) => error_status(&e),
    };

    let all_healthy = business_check.status == "ok" && job_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            businesses: business_check,
            jobs: job_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn ok_status(count: usize) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} record(s)", count)),
    }
}

fn error_status(error: &crate::error::AppError) -> CheckStatus {
    CheckStatus {
        status: "error".to_string(),
        message: Some(format!("Storage error: {:?}", error)),
    }
}
