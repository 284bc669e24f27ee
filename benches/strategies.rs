// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compare the counting and enumeration strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stair_climb::{CountStrategy, EnumerationMethod};

fn bench_table_counters(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_300");
    for strategy in [CountStrategy::BottomUp, CountStrategy::TopDown] {
        group.bench_with_input(BenchmarkId::from_parameter(strategy), &300usize, |b, &n| {
            b.iter(|| strategy.count(black_box(n)))
        });
    }
    group.finish();
}

fn bench_exponential_counters(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_20");
    for strategy in [
        CountStrategy::Recursive,
        CountStrategy::Search,
        CountStrategy::BottomUp,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(strategy), &20usize, |b, &n| {
            b.iter(|| strategy.count(black_box(n)))
        });
    }
    group.finish();
}

fn bench_enumerators(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_15");
    for method in [
        EnumerationMethod::Recursive,
        EnumerationMethod::Dynamic,
        EnumerationMethod::Search,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(method), &15usize, |b, &n| {
            b.iter(|| method.enumerate(black_box(n)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_table_counters,
    bench_exponential_counters,
    bench_enumerators
);
criterion_main!(benches);
