//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Query DTOs convert into domain filters at this
//! boundary, normalizing empty-string parameters to absent predicates.

pub mod business;
pub mod health;
pub mod job;
