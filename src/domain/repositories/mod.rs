//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the append-only collections backing the directory,
//! following the Repository pattern. Concrete implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`BusinessRepository`] - Business collection access
//! - [`JobRepository`] - Job request collection access
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod business_repository;
pub mod job_repository;

pub use business_repository::BusinessRepository;
pub use job_repository::JobRepository;

#[cfg(test)]
pub use business_repository::MockBusinessRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;
