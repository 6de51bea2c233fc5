use std::collections::HashSet;

use proptest::prelude::*;
use sift_core::models::{Candidate, Payload};
use sift_retrieval::mmr;
use sift_retrieval::similarity;

const DIMS: usize = 4;

fn arb_vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-10.0f32..10.0, DIMS)
}

fn arb_nonzero_vector() -> impl Strategy<Value = Vec<f32>> {
    arb_vector().prop_filter("non-zero norm", |v| {
        v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>() > 1e-2
    })
}

/// Candidates with unique ids; some lack a vector.
fn arb_candidates() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(
        (0.0f64..1.0, prop::option::weighted(0.8, arb_vector())),
        0..20,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (score, vector))| Candidate::new(format!("c{i}"), score, vector, Payload::new()))
            .collect()
    })
}

// ── Similarity ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn self_similarity_is_one(v in arb_nonzero_vector()) {
        let sim = similarity(&v, &v);
        prop_assert!((sim - 1.0).abs() < 1e-5, "similarity(v, v) = {}", sim);
    }

    #[test]
    fn negation_similarity_is_minus_one(v in arb_nonzero_vector()) {
        let neg: Vec<f32> = v.iter().map(|x| -x).collect();
        let sim = similarity(&v, &neg);
        prop_assert!((sim + 1.0).abs() < 1e-5, "similarity(v, -v) = {}", sim);
    }

    #[test]
    fn similarity_is_symmetric(a in arb_vector(), b in arb_vector()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn similarity_is_bounded(a in arb_vector(), b in arb_vector()) {
        let sim = similarity(&a, &b);
        prop_assert!(sim.is_finite());
        prop_assert!((-1.0 - 1e-6..=1.0 + 1e-6).contains(&sim), "out of bounds: {}", sim);
    }
}

// ── MMR ──────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn selection_length_is_min_of_k_and_eligible(
        candidates in arb_candidates(),
        k in 0usize..25,
        lambda in 0.0f64..=1.0,
    ) {
        let eligible = candidates.iter().filter(|c| c.has_usable_vector()).count();
        let selection = mmr::select(candidates, k, lambda);
        prop_assert_eq!(selection.len(), k.min(eligible));
    }

    #[test]
    fn selection_has_no_duplicate_ids(
        candidates in arb_candidates(),
        k in 0usize..25,
        lambda in 0.0f64..=1.0,
    ) {
        let selection = mmr::select(candidates, k, lambda);
        let unique: HashSet<&str> = selection.ids().into_iter().collect();
        prop_assert_eq!(unique.len(), selection.len());
    }

    #[test]
    fn selected_candidates_all_have_vectors(candidates in arb_candidates(), k in 0usize..25) {
        let selection = mmr::select(candidates, k, 0.5);
        prop_assert!(selection.selected.iter().all(|c| c.has_usable_vector()));
    }

    #[test]
    fn lambda_one_orders_by_descending_score(candidates in arb_candidates()) {
        let mut expected: Vec<(String, f64)> = candidates
            .iter()
            .filter(|c| c.has_usable_vector())
            .map(|c| (c.id.clone(), c.score))
            .collect();
        // Stable: equal scores keep input order.
        expected.sort_by(|a, b| b.1.total_cmp(&a.1));

        let selection = mmr::select(candidates, usize::MAX, 1.0);
        let got: Vec<String> = selection.selected.iter().map(|c| c.id.clone()).collect();
        let want: Vec<String> = expected.into_iter().map(|(id, _)| id).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn selection_is_deterministic(candidates in arb_candidates(), k in 0usize..25) {
        let first = mmr::select(candidates.clone(), k, 0.5);
        let second = mmr::select(candidates, k, 0.5);
        prop_assert_eq!(first.ids(), second.ids());
    }
}
