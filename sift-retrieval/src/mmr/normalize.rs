//! Relevance preparation for the MMR blend.

use sift_core::config::ScoreNormalization;

/// Map raw search scores to the relevance term used by MMR.
/// Non-finite scores count as 0.0.
pub fn relevance_scores(scores: &[f64], mode: ScoreNormalization) -> Vec<f64> {
    let finite: Vec<f64> = scores
        .iter()
        .map(|s| if s.is_finite() { *s } else { 0.0 })
        .collect();

    match mode {
        ScoreNormalization::None => finite,
        ScoreNormalization::MinMax => {
            let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
            let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let range = max - min;
            if range <= f64::EPSILON {
                // All equal: every candidate is maximally relevant.
                vec![1.0; finite.len()]
            } else {
                finite.iter().map(|s| (s - min) / range).collect()
            }
        }
    }
}
