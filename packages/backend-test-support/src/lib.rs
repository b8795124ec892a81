//! Test support utilities for the Shapeshift backend.
//!
//! Shared by the backend's integration tests: one-time logging
//! initialization and assertions for the problem+json error contract.

pub mod logging;
pub mod problem_details;
