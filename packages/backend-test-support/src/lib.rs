//! Test support utilities for the Car Master backend.
//!
//! Shared by the backend's unit and integration tests: one-time logging
//! initialization, error body assertions and unique test data.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;
