//! Optional cross-encoder re-ranking through an injected rerank service.
//!
//! Never fails: any problem with the service becomes
//! [`RerankOutcome::Unavailable`], which callers treat as a signal to fall back.
//! Without a configured service no call is attempted.

use std::collections::HashSet;
use std::fmt;

use sift_core::errors::{RerankError, SiftError};
use sift_core::models::RerankResult;
use sift_core::traits::IRerankService;
use tracing::{debug, warn};

/// A document placed by the rerank service.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDocument {
    /// Position in the document list passed to [`RerankerAdapter::rerank`].
    pub index: usize,
    pub relevance_score: f64,
    pub text: String,
}

/// Why reranking produced no ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// No service configured. Expected operating mode, not a degradation.
    NotConfigured,
    /// Transport or service-side failure.
    ServiceFailed { reason: String },
    /// The service answered with data that cannot be mapped back.
    MalformedResponse { reason: String },
}

impl UnavailableReason {
    /// Whether this reason represents a degraded state rather than a disabled stage.
    pub fn is_degradation(&self) -> bool {
        !matches!(self, Self::NotConfigured)
    }
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "rerank service not configured"),
            Self::ServiceFailed { reason } => write!(f, "rerank service failed: {reason}"),
            Self::MalformedResponse { reason } => write!(f, "malformed rerank response: {reason}"),
        }
    }
}

/// Result of a rerank attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RerankOutcome {
    /// Documents ordered by relevance (highest first), at most `top_k`.
    Ranked(Vec<RankedDocument>),
    Unavailable(UnavailableReason),
}

impl RerankOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ranked(_))
    }

    /// Ranked document texts; empty when unavailable.
    pub fn documents(&self) -> Vec<&str> {
        match self {
            Self::Ranked(ranked) => ranked.iter().map(|d| d.text.as_str()).collect(),
            Self::Unavailable(_) => Vec::new(),
        }
    }

    /// The `(documents, success)` view.
    pub fn into_parts(self) -> (Vec<String>, bool) {
        match self {
            Self::Ranked(ranked) => (ranked.into_iter().map(|d| d.text).collect(), true),
            Self::Unavailable(_) => (Vec::new(), false),
        }
    }
}

/// Wraps an optional rerank service with validation and fallback signalling.
#[derive(Clone, Copy)]
pub struct RerankerAdapter<'a> {
    service: Option<&'a dyn IRerankService>,
}

impl<'a> RerankerAdapter<'a> {
    pub fn new(service: Option<&'a dyn IRerankService>) -> Self {
        Self { service }
    }

    /// An adapter that always reports `NotConfigured`.
    pub fn disabled() -> Self {
        Self { service: None }
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_some()
    }

    /// Rerank `documents` against `query`, keeping the best `top_k`.
    /// Equal scores keep document order.
    pub fn rerank(&self, query: &str, documents: &[String], top_k: usize) -> RerankOutcome {
        let Some(service) = self.service else {
            debug!("reranker not configured, skipping");
            return RerankOutcome::Unavailable(UnavailableReason::NotConfigured);
        };

        if documents.is_empty() {
            return RerankOutcome::Ranked(Vec::new());
        }

        let results = match service.score_documents(query, documents) {
            Ok(results) => results,
            Err(e) => {
                let reason = classify_failure(e);
                warn!(service = service.name(), %reason, "rerank unavailable");
                return RerankOutcome::Unavailable(reason);
            }
        };

        let mut results = match validate(results, documents.len()) {
            Ok(results) => results,
            Err(reason) => {
                warn!(service = service.name(), %reason, "rerank response rejected");
                return RerankOutcome::Unavailable(UnavailableReason::MalformedResponse {
                    reason,
                });
            }
        };

        results.sort_by(|a, b| {
            b.relevance_score
                .total_cmp(&a.relevance_score)
                .then(a.index.cmp(&b.index))
        });
        results.truncate(top_k);

        debug!(
            service = service.name(),
            documents = documents.len(),
            kept = results.len(),
            "rerank complete"
        );

        RerankOutcome::Ranked(
            results
                .into_iter()
                .map(|r| RankedDocument {
                    index: r.index,
                    relevance_score: r.relevance_score,
                    text: documents[r.index].clone(),
                })
                .collect(),
        )
    }
}

fn classify_failure(error: SiftError) -> UnavailableReason {
    match error {
        SiftError::RerankError(RerankError::NotConfigured) => UnavailableReason::NotConfigured,
        SiftError::RerankError(RerankError::MalformedResponse { reason }) => {
            UnavailableReason::MalformedResponse { reason }
        }
        SiftError::SerializationError(e) => UnavailableReason::MalformedResponse {
            reason: e.to_string(),
        },
        other => UnavailableReason::ServiceFailed {
            reason: other.to_string(),
        },
    }
}

/// Every result must point at a distinct, existing document and carry a finite score.
fn validate(results: Vec<RerankResult>, document_count: usize) -> Result<Vec<RerankResult>, String> {
    if results.is_empty() {
        return Err(format!("no results for {document_count} documents"));
    }
    let mut seen = HashSet::with_capacity(results.len());
    for r in &results {
        if r.index >= document_count {
            return Err(format!(
                "index {} out of range for {document_count} documents",
                r.index
            ));
        }
        if !seen.insert(r.index) {
            return Err(format!("duplicate index {}", r.index));
        }
        if !r.relevance_score.is_finite() {
            return Err(format!("non-finite score for index {}", r.index));
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use sift_core::errors::SiftResult;

    struct Scripted {
        results: Vec<RerankResult>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(pairs: &[(usize, f64)]) -> Self {
            Self {
                results: pairs
                    .iter()
                    .map(|&(index, relevance_score)| RerankResult {
                        index,
                        relevance_score,
                    })
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl IRerankService for Scripted {
        fn score_documents(&self, _q: &str, _docs: &[String]) -> SiftResult<Vec<RerankResult>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.results.clone())
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    struct Down;

    impl IRerankService for Down {
        fn score_documents(&self, _q: &str, _docs: &[String]) -> SiftResult<Vec<RerankResult>> {
            Err(RerankError::RequestFailed {
                reason: "connection reset".into(),
            }
            .into())
        }

        fn name(&self) -> &str {
            "down"
        }
    }

    fn docs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("doc {i}")).collect()
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let service = Scripted::new(&[(0, 0.1), (1, 0.9), (2, 0.5)]);
        let outcome = RerankerAdapter::new(Some(&service)).rerank("q", &docs(3), 2);
        assert!(outcome.is_success());
        assert_eq!(outcome.documents(), vec!["doc 1", "doc 2"]);
    }

    #[test]
    fn equal_scores_keep_document_order() {
        let service = Scripted::new(&[(2, 0.5), (0, 0.5), (1, 0.5)]);
        let outcome = RerankerAdapter::new(Some(&service)).rerank("q", &docs(3), 3);
        assert_eq!(outcome.documents(), vec!["doc 0", "doc 1", "doc 2"]);
    }

    #[test]
    fn not_configured_short_circuits() {
        let outcome = RerankerAdapter::disabled().rerank("q", &docs(2), 2);
        assert_eq!(
            outcome,
            RerankOutcome::Unavailable(UnavailableReason::NotConfigured)
        );
        assert_eq!(outcome.into_parts(), (Vec::new(), false));
    }

    #[test]
    fn empty_documents_skip_the_service() {
        let service = Scripted::new(&[(0, 1.0)]);
        let outcome = RerankerAdapter::new(Some(&service)).rerank("q", &[], 3);
        assert_eq!(outcome, RerankOutcome::Ranked(Vec::new()));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn service_failure_is_absorbed() {
        let outcome = RerankerAdapter::new(Some(&Down)).rerank("q", &docs(2), 2);
        match outcome {
            RerankOutcome::Unavailable(reason) => {
                assert!(reason.is_degradation());
                assert!(reason.to_string().contains("connection reset"));
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_index_is_malformed() {
        let service = Scripted::new(&[(5, 0.9)]);
        let outcome = RerankerAdapter::new(Some(&service)).rerank("q", &docs(2), 2);
        assert!(matches!(
            outcome,
            RerankOutcome::Unavailable(UnavailableReason::MalformedResponse { .. })
        ));
    }

    #[test]
    fn duplicate_index_is_malformed() {
        let service = Scripted::new(&[(0, 0.9), (0, 0.8)]);
        let outcome = RerankerAdapter::new(Some(&service)).rerank("q", &docs(2), 2);
        assert!(!outcome.is_success());
    }

    #[test]
    fn nan_score_is_malformed() {
        let service = Scripted::new(&[(0, f64::NAN)]);
        let outcome = RerankerAdapter::new(Some(&service)).rerank("q", &docs(1), 1);
        assert!(!outcome.is_success());
    }

    #[test]
    fn empty_results_for_documents_is_malformed() {
        let service = Scripted::new(&[]);
        let outcome = RerankerAdapter::new(Some(&service)).rerank("q", &docs(2), 2);
        assert!(!outcome.is_success());
    }

    #[test]
    fn ranked_documents_keep_original_index() {
        let service = Scripted::new(&[(0, 0.2), (1, 0.7)]);
        let outcome = RerankerAdapter::new(Some(&service)).rerank("q", &docs(2), 1);
        match outcome {
            RerankOutcome::Ranked(ranked) => {
                assert_eq!(ranked.len(), 1);
                assert_eq!(ranked[0].index, 1);
                assert_eq!(ranked[0].relevance_score, 0.7);
            }
            other => panic!("expected ranked, got {other:?}"),
        }
    }
}
