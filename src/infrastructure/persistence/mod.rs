//! In-memory repository implementations.
//!
//! Concrete implementations of the domain repository traits backed by
//! process-local collections. There is no eviction, no capacity bound, and
//! no persistence; everything is lost at process stop.
//!
//! # Repositories
//!
//! - [`MemBusinessRepository`] - business collection
//! - [`MemJobRepository`] - job request collection

pub mod mem_business_repository;
pub mod mem_job_repository;

pub use mem_business_repository::MemBusinessRepository;
pub use mem_job_repository::MemJobRepository;
