//! # sift-retrieval
//!
//! The query engine. Three-stage pipeline: candidate vector search → diversity-aware
//! MMR selection → optional cross-encoder re-ranking, degrading to MMR order
//! whenever reranking is unavailable.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine (IRetriever)
//! ├── search::search_candidates   (IVectorSearch → normalized Candidates)
//! ├── MmrSelector
//! │   ├── normalize  (optional min-max relevance)
//! │   └── similarity (cosine, ε-guarded)
//! └── RerankerAdapter (IRerankService, optional)
//!     └── RerankOutcome (Ranked | Unavailable)
//! ```

pub mod engine;
pub mod mmr;
pub mod rerank;
pub mod search;
pub mod similarity;

pub use engine::{RetrievalEngine, RetrievalOutcome, RetrievalStage, RERANK_COMPONENT};
pub use mmr::MmrSelector;
pub use rerank::{RankedDocument, RerankOutcome, RerankerAdapter, UnavailableReason};
pub use similarity::similarity;
