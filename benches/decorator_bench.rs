//! Benchmark for the function decorators: Once and Memoize.
//!
//! Measures the cost of a cached call against calling the function directly.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use underbar::decorator::{memoize, once};

fn collatz_steps(mut value: u64) -> u32 {
    let mut steps = 0;
    while value != 1 {
        value = if value % 2 == 0 { value / 2 } else { 3 * value + 1 };
        steps += 1;
    }
    steps
}

// =============================================================================
// Once
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    group.bench_function("first_call", |bencher| {
        bencher.iter(|| {
            let wrapped = once(collatz_steps);
            black_box(wrapped.call(black_box(837_799)))
        });
    });

    let wrapped = once(collatz_steps);
    wrapped.call(837_799);
    group.bench_function("cached_call", |bencher| {
        bencher.iter(|| black_box(wrapped.call(black_box(837_799))));
    });

    group.finish();
}

// =============================================================================
// Memoize
// =============================================================================

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    group.bench_function("direct", |bencher| {
        bencher.iter(|| black_box(collatz_steps(black_box(837_799))));
    });

    let wrapped = memoize(collatz_steps);
    wrapped.call(837_799);
    group.bench_function("cache_hit", |bencher| {
        bencher.iter(|| black_box(wrapped.call(black_box(837_799))));
    });

    for distinct in [10_u64, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("cold_cache", distinct),
            &distinct,
            |bencher, &distinct| {
                bencher.iter(|| {
                    let wrapped = memoize(collatz_steps);
                    for value in 1..=distinct {
                        black_box(wrapped.call(value));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_once, benchmark_memoize);
criterion_main!(benches);
