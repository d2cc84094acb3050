//! In-memory implementation of the business repository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::entities::{Business, BusinessFilter};
use crate::domain::repositories::BusinessRepository;
use crate::error::{AppError, storage_poisoned};

/// In-memory, append-only business collection scoped to process lifetime.
///
/// Backed by an `RwLock<Vec<_>>`: the write lock covers a single push, so
/// each append is atomic with respect to its own record, and no lock is ever
/// held across an await point.
#[derive(Default)]
pub struct MemBusinessRepository {
    records: RwLock<Vec<Business>>,
}

impl MemBusinessRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BusinessRepository for MemBusinessRepository {
    async fn create(&self, business: Business) -> Result<Business, AppError> {
        let mut records = self.records.write().map_err(|_| storage_poisoned())?;
        records.push(business.clone());
        Ok(business)
    }

    async fn list(&self, filter: &BusinessFilter) -> Result<Vec<Business>, AppError> {
        let records = self.records.read().map_err(|_| storage_poisoned())?;
        Ok(records
            .iter()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError> {
        let records = self.records.read().map_err(|_| storage_poisoned())?;
        Ok(records.iter().find(|b| b.id == id).cloned())
    }

    async fn count(&self) -> Result<usize, AppError> {
        let records = self.records.read().map_err(|_| storage_poisoned())?;
        Ok(records.len())
    }
}
