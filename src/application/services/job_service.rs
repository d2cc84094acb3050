//! Job request submission and listing service.

use std::sync::Arc;

use crate::domain::entities::{JobFilter, JobRequest};
use crate::domain::repositories::JobRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for submitting and querying job requests.
pub struct JobService<R: JobRepository> {
    repository: Arc<R>,
}

impl<R: JobRepository> JobService<R> {
    /// Creates a new job service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists job requests matching the filter, in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<JobRequest>, AppError> {
        self.repository.list(filter).await
    }

    /// Retrieves a single job request by id.
    ///
    /// When duplicate ids exist, the earliest-appended record wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no job request has the given id.
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn get_job(&self, id: &str) -> Result<JobRequest, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Job request not found", json!({ "id": id })))
    }

    /// Stores a submitted job request and returns it unchanged.
    ///
    /// Ids are caller-supplied and deliberately not checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn submit_job(&self, job: JobRequest) -> Result<JobRequest, AppError> {
        self.repository.create(job).await
    }

    /// Counts stored job requests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn count_jobs(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
