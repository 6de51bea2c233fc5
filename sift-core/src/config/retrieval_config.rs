use serde::{Deserialize, Serialize};

use super::defaults;

/// How vector-search scores are prepared before the MMR blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreNormalization {
    /// Use scores exactly as the search backend returned them.
    #[default]
    None,
    /// Rescale eligible scores into [0, 1] (min-max) before blending.
    MinMax,
}

/// Retrieval pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Raw hits requested from vector search.
    pub topk_vector: usize,
    /// Candidates kept by MMR.
    pub mmr_k: usize,
    /// Final evidence size after reranking (or fallback).
    pub rerank_top_k: usize,
    /// Relevance/diversity trade-off. 1.0 = pure relevance.
    pub mmr_lambda: f64,
    /// Score preparation before the MMR blend.
    pub score_normalization: ScoreNormalization,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            topk_vector: defaults::DEFAULT_TOPK_VECTOR,
            mmr_k: defaults::DEFAULT_MMR_K,
            rerank_top_k: defaults::DEFAULT_RERANK_TOP_K,
            mmr_lambda: defaults::DEFAULT_MMR_LAMBDA,
            score_normalization: ScoreNormalization::None,
        }
    }
}
