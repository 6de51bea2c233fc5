//! # sift-observability
//!
//! Structured tracing setup and degradation tracking with recovery status.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
