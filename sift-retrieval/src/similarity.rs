//! Cosine similarity with an epsilon-guarded denominator.

use sift_core::config::defaults::SIMILARITY_EPSILON;

/// Cosine similarity between two embeddings: dot / (‖a‖·‖b‖ + ε).
///
/// Accumulates in f64. Zero-norm inputs yield 0.0 instead of dividing by zero.
/// Returns 0.0 for empty or mismatched-length vectors.
pub fn similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt() + SIMILARITY_EPSILON)
}

/// Highest similarity of `vector` to any of `others`; 0.0 when `others` is empty.
pub fn max_similarity<'a, I>(vector: &[f32], others: I) -> f64
where
    I: IntoIterator<Item = &'a [f32]>,
{
    others
        .into_iter()
        .map(|other| similarity(vector, other))
        .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn opposite_vectors_have_similarity_minus_one() {
        let v = vec![0.3, -1.2, 4.0];
        let neg: Vec<f32> = v.iter().map(|x| -x).collect();
        assert!((similarity(&v, &neg) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        assert!(similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-9);
    }

    #[test]
    fn zero_vector_does_not_divide_by_zero() {
        let sim = similarity(&[0.0, 0.0], &[1.0, 1.0]);
        assert_eq!(sim, 0.0);
        assert!(similarity(&[0.0, 0.0], &[0.0, 0.0]).is_finite());
    }

    #[test]
    fn mismatched_lengths_return_zero() {
        assert_eq!(similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(similarity(&[], &[]), 0.0);
    }

    #[test]
    fn max_similarity_of_empty_set_is_zero() {
        assert_eq!(max_similarity(&[1.0, 0.0], std::iter::empty()), 0.0);
    }

    #[test]
    fn max_similarity_keeps_negative_maximum() {
        // Every selected item points away from the candidate.
        let others: Vec<Vec<f32>> = vec![vec![-1.0, 0.0], vec![-1.0, -0.1]];
        let max = max_similarity(&[1.0, 0.0], others.iter().map(Vec::as_slice));
        assert!(max < -0.9);
    }
}
