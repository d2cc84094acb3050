//! Repository trait for the job request collection.

use crate::domain::entities::{JobFilter, JobRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the job request collection.
///
/// Job ids are caller-supplied and deliberately not checked for uniqueness;
/// [`Self::find_by_id`] resolves duplicates with a first-match policy.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemJobRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_job.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Appends a job request to the end of the collection and returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    async fn create(&self, job: JobRequest) -> Result<JobRequest, AppError>;

    /// Lists job requests matching the filter, preserving append order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobRequest>, AppError>;

    /// Finds the earliest-appended job request whose id equals `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(JobRequest))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    async fn find_by_id(&self, id: &str) -> Result<Option<JobRequest>, AppError>;

    /// Counts job requests in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    async fn count(&self) -> Result<usize, AppError>;
}
