// Copyright 2026 Martin Pool

//! Criterion benchmarks for trial division.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use primality::{classify, isqrt, primes};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for n in [7u64, 97, 7917, 7919, 1_000_000_007] {
        group.bench_with_input(format!("classify({n})"), &n, |b, &n| {
            b.iter(|| classify(black_box(n)))
        });
    }
    group.finish();
}

fn bench_isqrt(c: &mut Criterion) {
    c.bench_function("isqrt(u64::MAX)", |b| b.iter(|| isqrt(black_box(u64::MAX))));
}

fn bench_thousandth_prime(c: &mut Criterion) {
    c.bench_function("primes().nth(999)", |b| b.iter(|| primes().nth(black_box(999))));
}

criterion_group!(benches, bench_classify, bench_isqrt, bench_thousandth_prime);
criterion_main!(benches);
