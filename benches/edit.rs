//! Benchmarks for edit distances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use simil::{damerau_levenshtein, levenshtein, CostModel};

/// Random sequence over a small alphabet, so matches actually occur.
fn random_seq(n: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(b'a'..=b'h')).collect()
}

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");
    let costs = CostModel::default();

    for len in [8, 32, 128, 512] {
        let a = random_seq(len, 1);
        let b = random_seq(len, 2);

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::new("unit", len), &len, |bench, _| {
            bench.iter(|| levenshtein(black_box(&a), black_box(&b), &costs))
        });
    }

    group.finish();
}

fn bench_damerau(c: &mut Criterion) {
    let mut group = c.benchmark_group("damerau_levenshtein");
    let costs = CostModel::default();

    for len in [8, 32, 128, 512] {
        let a = random_seq(len, 1);
        let b = random_seq(len, 2);

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::new("unit", len), &len, |bench, _| {
            bench.iter(|| damerau_levenshtein(black_box(&a), black_box(&b), &costs))
        });
    }

    group.finish();
}

fn bench_asymmetric_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein_asymmetric");
    let costs = CostModel::default();
    let short = random_seq(16, 1);
    let long = random_seq(2048, 2);

    group.bench_function("short_to_long", |bench| {
        bench.iter(|| levenshtein(black_box(&short), black_box(&long), &costs))
    });
    group.bench_function("long_to_short", |bench| {
        bench.iter(|| levenshtein(black_box(&long), black_box(&short), &costs))
    });

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_damerau, bench_asymmetric_lengths);
criterion_main!(benches);
