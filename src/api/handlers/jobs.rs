//! Handlers for job request endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::job::{CreateJobRequest, JobListQuery, JobResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists job requests, optionally filtered by status and category.
///
/// # Endpoint
///
/// `GET /api/jobs?status=&category=`
///
/// # Filtering
///
/// Both `status` and `category` are case-sensitive exact matches, unlike the
/// business filters. Predicates combine with AND; absent or empty parameters
/// do not filter.
pub async fn job_list_handler(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<Json<Vec<JobResponse>>, AppError> {
    let filter = query.into_filter();
    let jobs = state.job_service.list_jobs(&filter).await?;

    Ok(Json(jobs.into_iter().map(Into::into).collect()))
}

/// Returns a single job request by id.
///
/// # Endpoint
///
/// `GET /api/jobs/{id}`
///
/// When duplicate ids exist the earliest submission is returned.
///
/// # Errors
///
/// Returns 404 Not Found if no job request has the given id.
pub async fn job_detail_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<JobResponse>, AppError> {
    let job = state.job_service.get_job(&id).await?;

    Ok(Json(job.into()))
}

/// Stores a submitted job request and echoes it back unchanged.
///
/// # Endpoint
///
/// `POST /api/jobs`
///
/// # Request Body
///
/// ```json
/// {
///   "id": "j1",
///   "title": "Fix leaking faucet",
///   "description": "Kitchen faucet drips constantly",
///   "budget": 120.0,
///   "status": "open",
///   "category": "plumbing",
///   "location": "Queens, NY",
///   "created_at": "2024-06-10T09:30:00Z"
/// }
/// ```
///
/// The id is caller-supplied and not checked for uniqueness; resubmitting an
/// id stores a second record, and lookups resolve to the first.
///
/// # Errors
///
/// Returns 400 Bad Request if shape validation fails; missing fields are
/// rejected by the JSON extractor with 422.
pub async fn create_job_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobRequest>,
) -> Result<Json<JobResponse>, AppError> {
    payload.validate()?;

    let job = state.job_service.submit_job(payload.into_entity()).await?;

    Ok(Json(job.into()))
}
