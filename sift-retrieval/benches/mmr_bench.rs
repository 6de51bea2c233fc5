use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sift_core::models::{Candidate, Payload};
use sift_retrieval::mmr;
use sift_retrieval::similarity;

const DIMS: usize = 384;

/// Deterministic pseudo-embedding so runs are comparable.
fn embedding(seed: usize) -> Vec<f32> {
    (0..DIMS)
        .map(|i| (((seed * 31 + i * 17) % 97) as f32 / 97.0) - 0.5)
        .collect()
}

/// 50 candidates with descending scores, matching a typical top-k pool.
fn build_pool(n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| {
            Candidate::new(
                format!("p{i}"),
                1.0 - i as f64 / n as f64,
                Some(embedding(i)),
                Payload::new().with("text", format!("passage {i}")),
            )
        })
        .collect()
}

fn bench_similarity_384(c: &mut Criterion) {
    let a = embedding(1);
    let b = embedding(2);
    c.bench_function("similarity_384d", |bencher| {
        bencher.iter(|| similarity(black_box(&a), black_box(&b)))
    });
}

fn bench_mmr_select_50(c: &mut Criterion) {
    let pool = build_pool(50);
    c.bench_function("mmr_select_8_of_50", |bencher| {
        bencher.iter(|| mmr::select(black_box(pool.clone()), 8, 0.5))
    });
}

fn bench_mmr_select_all(c: &mut Criterion) {
    let pool = build_pool(50);
    c.bench_function("mmr_select_50_of_50", |bencher| {
        bencher.iter(|| mmr::select(black_box(pool.clone()), 50, 0.5))
    });
}

criterion_group!(
    benches,
    bench_similarity_384,
    bench_mmr_select_50,
    bench_mmr_select_all
);
criterion_main!(benches);
