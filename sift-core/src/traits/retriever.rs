use crate::errors::SiftResult;
use crate::models::Candidate;

/// Query-time evidence retrieval using configured limits.
pub trait IRetriever: Send + Sync {
    /// Retrieve the final ordered evidence set for a query.
    fn retrieve_evidence(&self, query_vector: &[f32], query_text: &str)
        -> SiftResult<Vec<Candidate>>;
}
