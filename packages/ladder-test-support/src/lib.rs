//! Test support utilities shared by the ladder workspace.
//!
//! Provides idempotent logging initialization for test binaries and helpers
//! for generating unique test data.

pub mod logging;
pub mod unique_helpers;
