//! Benchmark for composed closures.
//!
//! Compares flat compositions against the equivalent hand-written closures,
//! which is the cost the type-level list representation is meant to avoid.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use closure_algebra::prelude::*;
use std::hint::black_box;

// =============================================================================
// Pipe vs nested closure calls
// =============================================================================

fn benchmark_pipe(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipe");

    let add = |value: u64| value.wrapping_add(42);
    let triple = |value: u64| value.wrapping_mul(3);
    let shift = |value: u64| value.rotate_left(5);

    let composed = transform(add) | transform(triple) | transform(shift);
    let handwritten = |value: u64| shift(triple(add(value)));

    for size in [100_u64, 10_000] {
        group.bench_with_input(BenchmarkId::new("composition", size), &size, |bencher, &size| {
            bencher.iter(|| (0..size).fold(0_u64, |acc, value| acc ^ composed.invoke((black_box(value),))));
        });

        group.bench_with_input(BenchmarkId::new("closure", size), &size, |bencher, &size| {
            bencher.iter(|| (0..size).fold(0_u64, |acc, value| acc ^ handwritten(black_box(value))));
        });
    }

    group.finish();
}

// =============================================================================
// Boolean combinators vs && / ||
// =============================================================================

fn benchmark_predicates(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("predicates");

    let is_even = |value: &u32| value % 2 == 0;
    let is_small = |value: &u32| *value < 5_000;
    let is_square = |value: &u32| value.isqrt().pow(2) == *value;

    let composed = predicate(is_even) * predicate(is_small) + predicate(is_square);
    let handwritten = |value: &u32| is_even(value) && is_small(value) || is_square(value);

    for size in [1_000_u32, 100_000] {
        group.bench_with_input(BenchmarkId::new("composition", size), &size, |bencher, &size| {
            bencher.iter(|| (0..size).filter(|value| composed.invoke((black_box(value),))).count());
        });

        group.bench_with_input(BenchmarkId::new("closure", size), &size, |bencher, &size| {
            bencher.iter(|| (0..size).filter(|value| handwritten(black_box(value))).count());
        });
    }

    group.finish();
}

// =============================================================================
// Currying vs capturing closures
// =============================================================================

fn benchmark_currying(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("currying");

    let clamp = |low: i64, high: i64, value: i64| value.clamp(low, high);
    let composed = transform(clamp) << -100 << 100;
    let handwritten = move |value: i64| clamp(-100, 100, value);

    group.bench_function("composition", |bencher| {
        bencher.iter(|| (-1_000..1_000).map(|value| composed.invoke((black_box(value),))).sum::<i64>());
    });

    group.bench_function("closure", |bencher| {
        bencher.iter(|| (-1_000..1_000).map(|value| handwritten(black_box(value))).sum::<i64>());
    });

    group.finish();
}

criterion_group!(benches, benchmark_pipe, benchmark_predicates, benchmark_currying);
criterion_main!(benches);
