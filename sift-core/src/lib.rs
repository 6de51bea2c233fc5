//! # sift-core
//!
//! Foundation crate for the sift retrieval pipeline.
//! Defines the candidate model, collaborator traits, errors, config, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SiftConfig;
pub use errors::{SiftError, SiftResult};
pub use models::{Candidate, Payload, RerankResult, SearchHit, Selection};
