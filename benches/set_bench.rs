//! Set construction, lookup and algebra benchmarks.
//!
//! Compares `UnorderedSet` (linear scan) against `OrderedSet` (binary
//! search placement) for the same workloads.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use seqset::{OrderedSet, UnorderedSet};
use std::hint::black_box;

const SIZES: [i32; 3] = [10, 100, 1000];

/// Deterministic, unsorted input with a few repeats.
fn generate_values(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % (size - size / 10)).collect()
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_insert");

    for size in SIZES {
        let values = generate_values(size);
        group.bench_with_input(BenchmarkId::new("unordered", size), &values, |bencher, values| {
            bencher.iter_batched(
                || values.clone(),
                |values| black_box(values.into_iter().collect::<UnorderedSet<i32>>()),
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("ordered", size), &values, |bencher, values| {
            bencher.iter_batched(
                || values.clone(),
                |values| black_box(values.into_iter().collect::<OrderedSet<i32>>()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_contains");

    for size in SIZES {
        let unordered: UnorderedSet<i32> = (0..size).collect();
        let ordered: OrderedSet<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("unordered", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for probe in (0..size).step_by(3) {
                    black_box(unordered.contains(black_box(&probe)));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("ordered", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for probe in (0..size).step_by(3) {
                    black_box(ordered.contains(black_box(&probe)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra");

    for size in SIZES {
        let left: OrderedSet<i32> = (0..size).collect();
        let right: OrderedSet<i32> = (size / 2..size + size / 2).collect();
        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&left + &right));
        });
        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&left - &right));
        });
        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.intersection(&right)));
        });
    }

    group.finish();
}

fn benchmark_combinations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_combinations");
    let set: UnorderedSet<i32> = (0..12).collect();

    for size in [2usize, 4, 6] {
        group.bench_with_input(BenchmarkId::new("choose", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(set.combinations(black_box(size))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_algebra,
    benchmark_combinations
);
criterion_main!(benches);
