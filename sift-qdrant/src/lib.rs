//! # sift-qdrant
//!
//! Vector search over a Qdrant collection via its REST API. Blocking HTTP,
//! no retries: a failed search is the caller's problem.

pub mod client;
pub mod protocol;

pub use client::QdrantSearch;
pub use protocol::{parse_search_response, SearchRequest};
