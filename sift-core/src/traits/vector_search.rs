use crate::errors::SiftResult;
use crate::models::SearchHit;

/// Nearest-neighbour search over indexed passages.
pub trait IVectorSearch: Send + Sync {
    /// Return up to `top_k` hits ordered by similarity to `query_vector`.
    fn search_vectors(
        &self,
        query_vector: &[f32],
        top_k: usize,
        with_payload: bool,
    ) -> SiftResult<Vec<SearchHit>>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}
