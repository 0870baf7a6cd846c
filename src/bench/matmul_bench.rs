//! Criterion benchmarks: naive vs. SIMD vs. tiled at a few sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use densemm::{Matrix, Scalar, TileConfig, multiply_naive, multiply_simd, multiply_tiled, multiply_tiled_with};
use wide::i32x8;

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for &n in &[64usize, 70, 128, 256] {
        let a = Matrix::random_seeded(n, 1, 10, 1).unwrap();
        let b = Matrix::random_seeded(n, 1, 10, 2).unwrap();
        group.throughput(Throughput::Elements((2 * n * n * n) as u64));

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |bench, _| {
            bench.iter(|| multiply_naive(black_box(&a), black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("simd", n), &n, |bench, _| {
            bench.iter(|| multiply_simd(black_box(&a), black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("tiled_x4", n), &n, |bench, _| {
            bench.iter(|| multiply_tiled(black_box(&a), black_box(&b)).unwrap())
        });

        let config = TileConfig::default();
        group.bench_with_input(BenchmarkId::new("tiled_x8", n), &n, |bench, _| {
            bench.iter(|| multiply_tiled_with::<i32x8>(black_box(&a), black_box(&b), &config).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("tiled_scalar", n), &n, |bench, _| {
            bench.iter(|| multiply_tiled_with::<Scalar>(black_box(&a), black_box(&b), &config).unwrap())
        });
    }

    group.finish();
}

fn bench_tile_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_size");
    let n = 256;
    let a = Matrix::random_seeded(n, 1, 10, 3).unwrap();
    let b = Matrix::random_seeded(n, 1, 10, 4).unwrap();

    for &tile in &[16usize, 32, 64, 128] {
        let config = TileConfig::new(tile).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(tile), &config, |bench, config| {
            bench.iter(|| multiply_tiled_with::<i32x8>(black_box(&a), black_box(&b), config).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_tile_sizes);
criterion_main!(benches);
