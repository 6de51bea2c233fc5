//! Maximal Marginal Relevance selection.
//!
//! Greedy: each round picks the remaining candidate maximizing
//! `λ·relevance − (1−λ)·max_sim(candidate, selected)`. Ties keep input order.
//! Candidates without a usable vector never enter the pool.

pub mod normalize;

use std::collections::HashSet;

use sift_core::config::defaults::DEFAULT_MMR_LAMBDA;
use sift_core::config::{RetrievalConfig, ScoreNormalization};
use sift_core::models::{Candidate, Selection, SkipReason, SkippedCandidate};

use crate::similarity::max_similarity;

/// Configured MMR selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MmrSelector {
    lambda: f64,
    normalization: ScoreNormalization,
}

impl MmrSelector {
    /// `lambda` is clamped into [0, 1]; NaN falls back to the default blend.
    pub fn new(lambda: f64) -> Self {
        let lambda = if lambda.is_nan() {
            DEFAULT_MMR_LAMBDA
        } else {
            lambda.clamp(0.0, 1.0)
        };
        Self {
            lambda,
            normalization: ScoreNormalization::None,
        }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(config.mmr_lambda).with_normalization(config.score_normalization)
    }

    pub fn with_normalization(mut self, normalization: ScoreNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Select up to `k` diverse, relevant candidates in selection order.
    pub fn select(&self, candidates: Vec<Candidate>, k: usize) -> Selection {
        let (pool, skipped) = partition_eligible(candidates);

        let scores: Vec<f64> = pool.iter().map(|c| c.score).collect();
        let relevance = normalize::relevance_scores(&scores, self.normalization);
        let mut remaining: Vec<(Candidate, f64)> = pool.into_iter().zip(relevance).collect();

        let mut selected: Vec<Candidate> = Vec::with_capacity(k.min(remaining.len()));
        while selected.len() < k && !remaining.is_empty() {
            let mut best: Option<(usize, f64)> = None;
            for (i, (candidate, rel)) in remaining.iter().enumerate() {
                let Some(vector) = candidate.vector.as_deref() else {
                    continue;
                };
                let redundancy =
                    max_similarity(vector, selected.iter().filter_map(|s| s.vector.as_deref()));
                let value = self.lambda * rel - (1.0 - self.lambda) * redundancy;
                if best.map_or(true, |(_, best_value)| value > best_value) {
                    best = Some((i, value));
                }
            }
            let Some((idx, _)) = best else {
                break;
            };
            selected.push(remaining.remove(idx).0);
        }

        Selection { selected, skipped }
    }
}

impl Default for MmrSelector {
    fn default() -> Self {
        Self::new(DEFAULT_MMR_LAMBDA)
    }
}

/// Select with raw scores and the given blend.
pub fn select(candidates: Vec<Candidate>, k: usize, lambda: f64) -> Selection {
    MmrSelector::new(lambda).select(candidates, k)
}

/// Split input into the MMR pool and the candidates it must skip.
/// The pool dimension is fixed by the first candidate with a usable vector.
fn partition_eligible(candidates: Vec<Candidate>) -> (Vec<Candidate>, Vec<SkippedCandidate>) {
    let mut pool = Vec::with_capacity(candidates.len());
    let mut skipped = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut dims: Option<usize> = None;

    for candidate in candidates {
        let reason = if !candidate.has_usable_vector() {
            Some(SkipReason::MissingVector)
        } else if seen.contains(&candidate.id) {
            Some(SkipReason::DuplicateId)
        } else {
            let len = candidate.vector.as_ref().map_or(0, Vec::len);
            match dims {
                Some(d) if d != len => Some(SkipReason::DimensionMismatch),
                _ => {
                    dims = Some(len);
                    None
                }
            }
        };

        match reason {
            Some(reason) => skipped.push(SkippedCandidate {
                id: candidate.id,
                reason,
            }),
            None => {
                seen.insert(candidate.id.clone());
                pool.push(candidate);
            }
        }
    }

    (pool, skipped)
}
