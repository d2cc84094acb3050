//! Business listing and lookup service.

use std::sync::Arc;

use crate::domain::entities::{Business, BusinessFilter};
use crate::domain::repositories::BusinessRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for querying the business directory.
///
/// Thin orchestration over the repository: filtered list scans pass through
/// unchanged, and a missed id lookup becomes the one domain error this
/// system knows, [`AppError::NotFound`].
pub struct BusinessService<R: BusinessRepository> {
    repository: Arc<R>,
}

impl<R: BusinessRepository> BusinessService<R> {
    /// Creates a new business service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists businesses matching the filter, in append order.
    ///
    /// A filter matching nothing yields an empty list, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn list_businesses(&self, filter: &BusinessFilter) -> Result<Vec<Business>, AppError> {
        self.repository.list(filter).await
    }

    /// Retrieves a single business by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no business has the given id.
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn get_business(&self, id: &str) -> Result<Business, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Business not found", json!({ "id": id })))
    }

    /// Adds a business to the directory.
    ///
    /// Used at startup for seeding; there is no public write endpoint for
    /// businesses yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn add_business(&self, business: Business) -> Result<Business, AppError> {
        self.repository.create(business).await
    }

    /// Counts listed businesses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn count_businesses(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
