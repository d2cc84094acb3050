//! Shared application state injected into request handlers.
//!
//! The storage collections are owned here (via the services' repositories)
//! rather than living as ambient globals: constructed once at process start,
//! dropped at process stop.

use std::sync::Arc;

use crate::application::services::{BusinessService, JobService};
use crate::infrastructure::persistence::{MemBusinessRepository, MemJobRepository};

#[derive(Clone)]
pub struct AppState {
    pub business_service: Arc<BusinessService<MemBusinessRepository>>,
    pub job_service: Arc<JobService<MemJobRepository>>,
}

impl AppState {
    /// Builds application state over fresh, empty collections.
    pub fn new() -> Self {
        Self {
            business_service: Arc::new(BusinessService::new(Arc::new(
                MemBusinessRepository::new(),
            ))),
            job_service: Arc::new(JobService::new(Arc::new(MemJobRepository::new()))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
