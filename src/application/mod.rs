//! Application layer services orchestrating domain operations.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::business_service::BusinessService`] - business listing and lookup
//! - [`services::job_service::JobService`] - job request submission and listing

pub mod services;
