//! Integration test utilities for the audit label service
//!
//! Spawns the REST API on a local port and drives it over HTTP.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
