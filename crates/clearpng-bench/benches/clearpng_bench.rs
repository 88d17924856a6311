//! Benchmarks for ClearPNG per-pixel operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use clearpng_color::{distance, Algorithm, Cielab, Euclidean, WeightedEuclidean};
use clearpng_core::{rgb_screen, BlendMode, RgbPixel};

/// Deterministic pseudo-random pixels (xorshift), no RNG dependency needed.
fn pixels(n: usize) -> Vec<RgbPixel> {
    let mut state = 0x2545_f491_u32;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            RgbPixel::from_array([r, g, b])
        })
        .collect()
}

/// Benchmark blend modes over a row of pixels.
fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");

    for size in [1000, 10000, 100000].iter() {
        let base = pixels(*size);
        let layer = pixels(*size + 7)[7..].to_vec();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("multiply_op", size), &(&base, &layer), |b, (x, y)| {
            b.iter(|| {
                x.iter().zip(y.iter()).map(|(&p, &q)| black_box(p) * black_box(q)).collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("screen", size), &(&base, &layer), |b, (x, y)| {
            b.iter(|| {
                x.iter().zip(y.iter()).map(|(&p, &q)| rgb_screen(black_box(p), black_box(q))).collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("add_resolved", size), &(&base, &layer), |b, (x, y)| {
            let op = BlendMode::Add.resolve();
            b.iter(|| {
                x.iter().zip(y.iter()).map(|(&p, &q)| op(black_box(p), black_box(q))).collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark distance metrics, generic vs. resolved function pointer.
fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    let a = pixels(10000);
    let b = pixels(10007)[7..].to_vec();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("euclidean", |bench| {
        bench.iter(|| a.iter().zip(&b).map(|(&p, &q)| distance::<Euclidean>(black_box(p), q)).sum::<f32>())
    });

    group.bench_function("weighted_euclidean", |bench| {
        bench.iter(|| {
            a.iter().zip(&b).map(|(&p, &q)| distance::<WeightedEuclidean>(black_box(p), q)).sum::<f32>()
        })
    });

    group.bench_function("cielab", |bench| {
        bench.iter(|| a.iter().zip(&b).map(|(&p, &q)| distance::<Cielab>(black_box(p), q)).sum::<f32>())
    });

    for algorithm in Algorithm::ALL {
        let metric = algorithm.resolve();
        group.bench_with_input(BenchmarkId::new("resolved", algorithm), &metric, |bench, metric| {
            bench.iter(|| a.iter().zip(&b).map(|(&p, &q)| metric(black_box(p), q)).sum::<f32>())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_blend, bench_distance);
criterion_main!(benches);
