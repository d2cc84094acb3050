//! Repository trait for the business collection.

use crate::domain::entities::{Business, BusinessFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the business collection.
///
/// The collection is append-only: businesses are created at process start
/// (or by future write paths) and never updated or deleted. Any extension
/// adding update/delete must keep the append-order and first-match
/// guarantees below as a baseline.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemBusinessRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_business.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Appends a business to the end of the collection.
    ///
    /// No uniqueness check is performed; callers may insert duplicate ids,
    /// in which case [`Self::find_by_id`] returns the first one appended.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    async fn create(&self, business: Business) -> Result<Business, AppError>;

    /// Lists businesses matching the filter, preserving append order.
    ///
    /// An empty filter returns the full collection. A filter matching
    /// nothing yields `Ok(vec![])`, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    async fn list(&self, filter: &BusinessFilter) -> Result<Vec<Business>, AppError>;

    /// Finds the first business whose id equals `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Business))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError>;

    /// Counts businesses in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    async fn count(&self) -> Result<usize, AppError>;
}
