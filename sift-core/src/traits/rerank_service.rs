use crate::errors::SiftResult;
use crate::models::RerankResult;

/// Cross-encoder relevance scoring of (query, document) pairs.
pub trait IRerankService: Send + Sync {
    /// Score `documents` against `query`. Results reference documents by index
    /// and may arrive in any order.
    fn score_documents(&self, query: &str, documents: &[String]) -> SiftResult<Vec<RerankResult>>;

    /// Human-readable service name.
    fn name(&self) -> &str;
}
