//! Infrastructure layer implementing the domain storage contracts.
//!
//! # Modules
//!
//! - [`persistence`] - in-memory repository implementations

pub mod persistence;
