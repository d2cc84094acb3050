//! # LocalBiz API
//!
//! A local business directory and job board service built with Axum,
//! backed entirely by in-process, non-persistent storage.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, list filters, and repository traits
//! - **Application Layer** ([`application`]) - Service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory collection storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Business directory with search and category filtering
//! - Job request submission and filtered listing
//! - Append-only in-memory storage with first-match id lookups
//! - Permissive CORS for browser frontends
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: override defaults
//! export LISTEN="0.0.0.0:3000"
//! export LOG_FORMAT="json"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod seed;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BusinessService, JobService};
    pub use crate::domain::entities::{
        Business, BusinessFilter, ContactInfo, JobFilter, JobRequest, Service,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
