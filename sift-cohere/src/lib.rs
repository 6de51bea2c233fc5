//! # sift-cohere
//!
//! Cross-encoder reranking through the Cohere rerank endpoint. Without an
//! API key no client is built and retrieval runs MMR-only.

pub mod client;
pub mod protocol;

pub use client::CohereReranker;
pub use protocol::{parse_rerank_response, RerankRequest};
