//! In-memory implementation of the job request repository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::entities::{JobFilter, JobRequest};
use crate::domain::repositories::JobRepository;
use crate::error::{AppError, storage_poisoned};

/// In-memory, append-only job request collection scoped to process lifetime.
///
/// Duplicate ids are accepted as-is; `find_by_id` scans front to back so the
/// earliest append wins.
#[derive(Default)]
pub struct MemJobRepository {
    records: RwLock<Vec<JobRequest>>,
}

impl MemJobRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for MemJobRepository {
    async fn create(&self, job: JobRequest) -> Result<JobRequest, AppError> {
        let mut records = self.records.write().map_err(|_| storage_poisoned())?;
        records.push(job.clone());
        Ok(job)
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobRequest>, AppError> {
        let records = self.records.read().map_err(|_| storage_poisoned())?;
        Ok(records
            .iter()
            .filter(|j| filter.matches(j))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<JobRequest>, AppError> {
        let records = self.records.read().map_err(|_| storage_poisoned())?;
        Ok(records.iter().find(|j| j.id == id).cloned())
    }

    async fn count(&self) -> Result<usize, AppError> {
        let records = self.records.read().map_err(|_| storage_poisoned())?;
        Ok(records.len())
    }
}
