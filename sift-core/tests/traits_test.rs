use sift_core::errors::SiftResult;
use sift_core::models::{Candidate, Payload, RerankResult, SearchHit};
use sift_core::traits::{IRerankService, IRetriever, IVectorSearch};

struct FixedSearch;

impl IVectorSearch for FixedSearch {
    fn search_vectors(
        &self,
        query_vector: &[f32],
        top_k: usize,
        _with_payload: bool,
    ) -> SiftResult<Vec<SearchHit>> {
        Ok((0..top_k)
            .map(|i| SearchHit {
                id: format!("p{i}"),
                score: 1.0 - i as f64 * 0.1,
                vector: Some(query_vector.to_vec()),
                payload: Some(Payload::new().with("text", format!("passage {i}"))),
            })
            .collect())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

struct IdentityRerank;

impl IRerankService for IdentityRerank {
    fn score_documents(&self, _query: &str, documents: &[String]) -> SiftResult<Vec<RerankResult>> {
        Ok(documents
            .iter()
            .enumerate()
            .map(|(index, _)| RerankResult {
                index,
                relevance_score: 1.0,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "identity"
    }
}

struct EmptyRetriever;

impl IRetriever for EmptyRetriever {
    fn retrieve_evidence(&self, _v: &[f32], _q: &str) -> SiftResult<Vec<Candidate>> {
        Ok(Vec::new())
    }
}

#[test]
fn traits_are_object_safe() {
    let search: &dyn IVectorSearch = &FixedSearch;
    let rerank: &dyn IRerankService = &IdentityRerank;
    let retriever: &dyn IRetriever = &EmptyRetriever;

    let hits = search.search_vectors(&[1.0, 0.0], 3, true).unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(search.name(), "fixed");

    let docs = vec!["a".to_string(), "b".to_string()];
    assert_eq!(rerank.score_documents("q", &docs).unwrap().len(), 2);

    assert!(retriever.retrieve_evidence(&[1.0], "q").unwrap().is_empty());
}
