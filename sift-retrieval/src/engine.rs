//! RetrievalEngine: implements IRetriever, orchestrates the three-stage pipeline.
//!
//! Stage 1: Vector search (mandatory, errors propagate)
//! Stage 2: MMR diversity selection
//! Stage 3: Cross-encoder rerank (optional, failures fall back to MMR order)

use sift_core::config::RetrievalConfig;
use sift_core::errors::{SiftError, SiftResult};
use sift_core::models::{Candidate, DegradationEvent, SkippedCandidate};
use sift_core::traits::{IRerankService, IRetriever, IVectorSearch};
use tracing::{debug, info, warn};

use crate::mmr::MmrSelector;
use crate::rerank::{RerankOutcome, RerankerAdapter, UnavailableReason};
use crate::search;

/// Component name carried by rerank degradation events.
pub const RERANK_COMPONENT: &str = "rerank";

/// Where the pipeline stopped and which ordering the evidence carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalStage {
    /// Vector search found nothing resembling the query.
    NoHits,
    /// Hits existed but none could take part in MMR.
    NoEligibleCandidates,
    /// Evidence is in rerank order.
    Reranked,
    /// Reranking was unavailable; evidence is in MMR order.
    MmrFallback,
}

/// Evidence plus what happened on the way there.
#[derive(Debug, Clone)]
pub struct RetrievalOutcome {
    pub evidence: Vec<Candidate>,
    pub stage: RetrievalStage,
    /// Raw hits returned by vector search.
    pub hit_count: usize,
    /// Hits excluded from MMR.
    pub skipped: Vec<SkippedCandidate>,
    /// Why reranking did not apply, if it didn't.
    pub rerank_unavailable: Option<UnavailableReason>,
    /// Set when a configured reranker failed and the fallback was used.
    pub degradation: Option<DegradationEvent>,
}

impl RetrievalOutcome {
    /// Evidence, or `DegradedMode` when a configured reranker failed and
    /// MMR order was substituted.
    pub fn into_strict(self) -> SiftResult<Vec<Candidate>> {
        match self.degradation {
            Some(event) => Err(SiftError::DegradedMode {
                component: event.component,
                fallback: event.fallback_used,
            }),
            None => Ok(self.evidence),
        }
    }

    fn empty(stage: RetrievalStage, hit_count: usize, skipped: Vec<SkippedCandidate>) -> Self {
        Self {
            evidence: Vec::new(),
            stage,
            hit_count,
            skipped,
            rerank_unavailable: None,
            degradation: None,
        }
    }
}

/// The retrieval orchestrator. Collaborators are borrowed from the caller.
pub struct RetrievalEngine<'a> {
    search: &'a dyn IVectorSearch,
    reranker: RerankerAdapter<'a>,
    selector: MmrSelector,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        search: &'a dyn IVectorSearch,
        reranker: Option<&'a dyn IRerankService>,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            search,
            reranker: RerankerAdapter::new(reranker),
            selector: MmrSelector::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Retrieve the final ordered evidence set.
    pub fn retrieve(
        &self,
        query_vector: &[f32],
        query_text: &str,
        topk: usize,
        mmr_k: usize,
        rerank_topk: usize,
    ) -> SiftResult<Vec<Candidate>> {
        self.retrieve_with_report(query_vector, query_text, topk, mmr_k, rerank_topk)
            .map(|outcome| outcome.evidence)
    }

    /// Run the full pipeline and report which stage produced the result.
    pub fn retrieve_with_report(
        &self,
        query_vector: &[f32],
        query_text: &str,
        topk: usize,
        mmr_k: usize,
        rerank_topk: usize,
    ) -> SiftResult<RetrievalOutcome> {
        // Step 1: Vector search.
        let candidates = search::search_candidates(self.search, query_vector, topk)?;
        let hit_count = candidates.len();
        if candidates.is_empty() {
            debug!("no candidates found");
            return Ok(RetrievalOutcome::empty(RetrievalStage::NoHits, 0, Vec::new()));
        }

        // Step 2: MMR.
        let selection = self.selector.select(candidates, mmr_k);
        if !selection.skipped.is_empty() {
            warn!(
                skipped = selection.skipped.len(),
                "candidates excluded from mmr"
            );
        }
        if selection.is_empty() {
            debug!(hit_count, "no candidates eligible for mmr");
            return Ok(RetrievalOutcome::empty(
                RetrievalStage::NoEligibleCandidates,
                hit_count,
                selection.skipped,
            ));
        }
        debug!(hit_count, selected = selection.len(), "mmr selection complete");

        // Step 3: Rerank the survivors' texts.
        let documents: Vec<String> = selection
            .selected
            .iter()
            .map(|c| c.text().to_string())
            .collect();
        let outcome = self.reranker.rerank(query_text, &documents, rerank_topk);

        let skipped = selection.skipped;
        let mut selected = selection.selected;

        let result = match outcome {
            // Step 4: Map rerank order back onto MMR survivors.
            RerankOutcome::Ranked(ranked) => {
                let mut slots: Vec<Option<Candidate>> = selected.into_iter().map(Some).collect();
                let evidence: Vec<Candidate> = ranked
                    .iter()
                    .filter_map(|doc| slots.get_mut(doc.index).and_then(Option::take))
                    .take(rerank_topk)
                    .collect();
                RetrievalOutcome {
                    evidence,
                    stage: RetrievalStage::Reranked,
                    hit_count,
                    skipped,
                    rerank_unavailable: None,
                    degradation: None,
                }
            }
            // Step 5: Fall back to MMR order.
            RerankOutcome::Unavailable(reason) => {
                selected.truncate(rerank_topk);
                let degradation = reason.is_degradation().then(|| {
                    DegradationEvent::now(RERANK_COMPONENT, reason.to_string(), "mmr_order")
                });
                if degradation.is_some() {
                    warn!(%reason, "rerank degraded, using mmr order");
                }
                RetrievalOutcome {
                    evidence: selected,
                    stage: RetrievalStage::MmrFallback,
                    hit_count,
                    skipped,
                    rerank_unavailable: Some(reason),
                    degradation,
                }
            }
        };

        info!(
            hit_count,
            evidence = result.evidence.len(),
            stage = ?result.stage,
            "retrieval complete"
        );

        Ok(result)
    }
}

impl IRetriever for RetrievalEngine<'_> {
    fn retrieve_evidence(&self, query_vector: &[f32], query_text: &str) -> SiftResult<Vec<Candidate>> {
        self.retrieve(
            query_vector,
            query_text,
            self.config.topk_vector,
            self.config.mmr_k,
            self.config.rerank_top_k,
        )
    }
}
