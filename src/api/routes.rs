//! API route configuration.

use crate::api::handlers::{
    business_detail_handler, business_list_handler, create_job_handler, job_detail_handler,
    job_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `GET  /businesses`       - List businesses (filter: `search`, `category`)
/// - `GET  /businesses/{id}`  - Single business by id
/// - `GET  /jobs`             - List job requests (filter: `status`, `category`)
/// - `GET  /jobs/{id}`        - Single job request by id (first match on duplicates)
/// - `POST /jobs`             - Submit a job request
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/businesses", get(business_list_handler))
        .route("/businesses/{id}", get(business_detail_handler))
        .route("/jobs", get(job_list_handler).post(create_job_handler))
        .route("/jobs/{id}", get(job_detail_handler))
}
