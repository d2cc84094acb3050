//! DTOs for job request endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{JobFilter, JobRequest};

/// Query parameters for `GET /api/jobs`.
#[derive(Debug, Deserialize, Default)]
pub struct JobListQuery {
    pub status: Option<String>,
    pub category: Option<String>,
}

impl JobListQuery {
    /// Converts the raw query parameters into a domain filter.
    ///
    /// Empty-string parameters count as absent predicates.
    pub fn into_filter(self) -> JobFilter {
        JobFilter {
            status: self.status.filter(|s| !s.is_empty()),
            category: self.category.filter(|c| !c.is_empty()),
        }
    }
}

/// Request body for `POST /api/jobs`.
///
/// All fields are required; missing fields are rejected by the JSON
/// extractor before the handler runs. The id and timestamp are
/// caller-supplied and stored verbatim.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    pub description: String,
    pub budget: f64,
    pub status: String,
    pub category: String,
    pub location: String,
    pub created_at: String,
}

impl CreateJobRequest {
    /// Converts the validated request body into the domain entity.
    pub fn into_entity(self) -> JobRequest {
        JobRequest {
            id: self.id,
            title: self.title,
            description: self.description,
            budget: self.budget,
            status: self.status,
            category: self.category,
            location: self.location,
            created_at: self.created_at,
        }
    }
}

/// JSON representation of a job request.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub status: String,
    pub category: String,
    pub location: String,
    pub created_at: String,
}

impl From<JobRequest> for JobResponse {
    fn from(job: JobRequest) -> Self {
        Self {
            id: job.id,
            title: job.title,
            description: job.description,
            budget: job.budget,
            status: job.status,
            category: job.category,
            location: job.location,
            created_at: job.created_at,
        }
    }
}
