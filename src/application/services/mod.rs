//! Business logic services for the application layer.

pub mod business_service;
pub mod job_service;

pub use business_service::BusinessService;
pub use job_service::JobService;
