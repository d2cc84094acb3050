//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod businesses;
pub mod health;
pub mod jobs;
pub mod root;

pub use businesses::{business_detail_handler, business_list_handler};
pub use health::health_handler;
pub use jobs::{create_job_handler, job_detail_handler, job_list_handler};
pub use root::root_handler;
