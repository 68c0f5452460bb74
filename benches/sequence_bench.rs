//! Benchmark for the lazy sequence helpers.
//!
//! Compares the single-pass lazy `partition` against the eager
//! `Iterator::partition`, and `choose` against a hand-written `filter_map`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fpkit::control::{Either, Maybe, partition_eithers, rights};
use fpkit::sequence::{choose, partition, scan};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// =============================================================================
// Partition Benchmarks
// =============================================================================

fn benchmark_partition(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partition");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let items: Vec<u64> = (0..size as u64).collect();

        // Draining one group fully before the other buffers half the input.
        group.bench_with_input(BenchmarkId::new("lazy_sequential", size), &items, |bencher, items| {
            bencher.iter(|| {
                let (even, odd) = partition(items.iter().copied(), |x| x % 2 == 0);
                black_box((even.sum::<u64>(), odd.sum::<u64>()))
            });
        });

        group.bench_with_input(BenchmarkId::new("lazy_interleaved", size), &items, |bencher, items| {
            bencher.iter(|| {
                let (even, odd) = partition(items.iter().copied(), |x| x % 2 == 0);
                black_box(even.zip(odd).map(|(a, b)| a + b).sum::<u64>())
            });
        });

        group.bench_with_input(BenchmarkId::new("std_eager", size), &items, |bencher, items| {
            bencher.iter(|| {
                let (even, odd): (Vec<u64>, Vec<u64>) = items.iter().copied().partition(|x| x % 2 == 0);
                black_box((even.into_iter().sum::<u64>(), odd.into_iter().sum::<u64>()))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Choose Benchmarks
// =============================================================================

fn benchmark_choose(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("choose");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let texts: Vec<String> = (0..size)
            .map(|index| if index % 3 == 0 { "x".to_string() } else { index.to_string() })
            .collect();

        group.bench_with_input(BenchmarkId::new("choose_try_parse_int", size), &texts, |bencher, texts| {
            bencher.iter(|| {
                black_box(choose(texts.iter(), |text| Maybe::try_parse_int(text)).count())
            });
        });

        group.bench_with_input(BenchmarkId::new("manual_filter_map", size), &texts, |bencher, texts| {
            bencher.iter(|| {
                black_box(texts.iter().filter_map(|text| text.trim().parse::<i32>().ok()).count())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Either Aggregate Benchmarks
// =============================================================================

fn benchmark_either_aggregates(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_aggregates");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let items: Vec<Either<u32, u64>> = (0..size as u64)
            .map(|x| if x % 4 == 0 { Either::Left(1) } else { Either::Right(x) })
            .collect();

        group.bench_with_input(BenchmarkId::new("partition_eithers", size), &items, |bencher, items| {
            bencher.iter(|| black_box(partition_eithers(items.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("rights_sum", size), &items, |bencher, items| {
            bencher.iter(|| black_box(rights(items.iter().copied()).sum::<u64>()));
        });
    }

    group.finish();
}

// =============================================================================
// Scan Benchmarks
// =============================================================================

fn benchmark_scan(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("scan");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("running_sum", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(scan(0..size as u64, 0_u64, |total, x| total + x)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_partition,
    benchmark_choose,
    benchmark_either_aggregates,
    benchmark_scan
);

criterion_main!(benches);
