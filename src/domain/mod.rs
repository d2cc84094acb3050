//! Domain layer containing the directory entities and storage contracts.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines entities, filter predicates, and repository
//! interfaces independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures and list filters
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
