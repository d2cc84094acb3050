//! Core domain entities representing the directory data model.
//!
//! This module contains the fundamental data structures of the LocalBiz
//! directory. Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Business`] - A listed business with embedded services and contact info
//! - [`Service`] - A service offered by a business (owned by its parent)
//! - [`ContactInfo`] - Contact details value object
//! - [`JobRequest`] - A customer-submitted job request
//!
//! # Filters
//!
//! List queries are narrowed by filter value objects ([`BusinessFilter`],
//! [`JobFilter`]) whose predicates compose with logical AND. The two filters
//! deliberately differ: business matching is case-insensitive, job matching
//! is case-sensitive.
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod business;
pub mod job;

pub use business::{Business, BusinessFilter, ContactInfo, Service};
pub use job::{JobFilter, JobRequest};
