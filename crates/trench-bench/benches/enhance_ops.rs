//! Criterion benchmarks for enhancement passes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trench_bench::{sample_profile, scatter_profile};
use trench_engine::{EnhanceConfig, Enhancer};
use trench_space::Bounds;

fn bench_sample_50(c: &mut Criterion) {
    let image = sample_profile().unwrap();
    c.bench_function("sample_50_passes", |b| {
        b.iter(|| {
            let mut img = image.clone();
            for _ in 0..50 {
                img = img.enhance();
            }
            black_box(img.lit_count())
        });
    });
}

fn bench_scatter_pass(c: &mut Criterion) {
    let image = scatter_profile(100, 100, 42).unwrap();
    c.bench_function("scatter_100x100_pass", |b| {
        b.iter(|| black_box(image.enhance()));
    });
}

fn bench_partitioned(c: &mut Criterion) {
    let image = scatter_profile(200, 200, 42).unwrap();
    let mut group = c.benchmark_group("partitioned_200x200_pass");
    for workers in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &w| {
            b.iter(|| black_box(image.enhance_partitioned(w)));
        });
    }
    group.finish();
}

fn bench_driver_run(c: &mut Criterion) {
    let image = scatter_profile(50, 50, 7).unwrap();
    let config = EnhanceConfig {
        iterations: 20,
        checkpoints: vec![20],
        workers: 1,
    };
    c.bench_function("driver_20_passes_50x50", |b| {
        b.iter(|| {
            let mut enhancer = Enhancer::new(image.clone(), config.clone()).unwrap();
            black_box(enhancer.run().unwrap())
        });
    });
}

fn bench_split_rows(c: &mut Criterion) {
    let bounds = scatter_profile(300, 300, 1).unwrap().bounds();
    c.bench_function("bounds_split_rows_300", |b| {
        b.iter(|| black_box(Bounds::split_rows(&bounds, 8)));
    });
}

criterion_group!(
    benches,
    bench_sample_50,
    bench_scatter_pass,
    bench_partitioned,
    bench_driver_run,
    bench_split_rows
);
criterion_main!(benches);
