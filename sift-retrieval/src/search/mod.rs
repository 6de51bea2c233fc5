//! Vector search boundary: fetch raw hits and normalize them into candidates.

use sift_core::errors::SiftResult;
use sift_core::models::Candidate;
use sift_core::traits::IVectorSearch;
use tracing::debug;

/// Run vector search and normalize every hit against the query dimension.
///
/// An empty query vector returns no candidates without calling the backend.
/// Backend errors propagate: vector search is the mandatory stage.
pub fn search_candidates(
    search: &dyn IVectorSearch,
    query_vector: &[f32],
    limit: usize,
) -> SiftResult<Vec<Candidate>> {
    if query_vector.is_empty() || limit == 0 {
        return Ok(Vec::new());
    }

    let hits = search.search_vectors(query_vector, limit, true)?;
    debug!(backend = search.name(), hits = hits.len(), limit, "vector search returned");

    let dims = query_vector.len();
    Ok(hits
        .into_iter()
        .take(limit)
        .map(|hit| Candidate::from_hit(hit, Some(dims)))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use sift_core::errors::VectorStoreError;
    use sift_core::models::SearchHit;

    struct Hits {
        hits: Vec<SearchHit>,
        calls: AtomicUsize,
    }

    impl IVectorSearch for Hits {
        fn search_vectors(&self, _v: &[f32], _k: usize, _p: bool) -> SiftResult<Vec<SearchHit>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.hits.clone())
        }

        fn name(&self) -> &str {
            "hits"
        }
    }

    struct Broken;

    impl IVectorSearch for Broken {
        fn search_vectors(&self, _v: &[f32], _k: usize, _p: bool) -> SiftResult<Vec<SearchHit>> {
            Err(VectorStoreError::NotConfigured {
                field: "vector_store.url".into(),
            }
            .into())
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn hit(id: &str, vector: Vec<f32>) -> SearchHit {
        SearchHit {
            id: id.into(),
            score: 0.5,
            vector: Some(vector),
            payload: None,
        }
    }

    #[test]
    fn hits_with_wrong_dimension_lose_their_vector() {
        let backend = Hits {
            hits: vec![hit("ok", vec![1.0, 0.0]), hit("bad", vec![1.0, 0.0, 0.0])],
            calls: AtomicUsize::new(0),
        };
        let candidates = search_candidates(&backend, &[0.5, 0.5], 10).unwrap();
        assert!(candidates[0].has_usable_vector());
        assert!(candidates[1].vector.is_none());
    }

    #[test]
    fn over_long_backend_answers_are_truncated() {
        let backend = Hits {
            hits: vec![hit("a", vec![1.0]), hit("b", vec![1.0]), hit("c", vec![1.0])],
            calls: AtomicUsize::new(0),
        };
        assert_eq!(search_candidates(&backend, &[1.0], 2).unwrap().len(), 2);
    }

    #[test]
    fn empty_query_vector_skips_backend() {
        let backend = Hits {
            hits: vec![hit("a", vec![1.0])],
            calls: AtomicUsize::new(0),
        };
        assert!(search_candidates(&backend, &[], 5).unwrap().is_empty());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn backend_errors_propagate() {
        assert!(search_candidates(&Broken, &[1.0], 5).is_err());
    }
}
