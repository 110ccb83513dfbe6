//! Criterion benchmarks for nearest-feature queries.
//! Pairs come from the replay-token sampler, so runs are comparable.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use planar::prelude::*;
use planar::sample::{draw_pair, TriangleCfg};

fn pairs(n: u64, seed: u64) -> Vec<(Triangle, Triangle)> {
    (0..n)
        .filter_map(|i| draw_pair(TriangleCfg::default(), seed, i))
        .collect()
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    for &n in &[1u64, 64, 1024] {
        group.bench_with_input(BenchmarkId::new("triangle_triangle", n), &n, |b, &n| {
            b.iter_batched(
                || pairs(n, 17),
                |ps| {
                    for (t, u) in &ps {
                        let _ = t.closest_points(u);
                    }
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("triangle_point", n), &n, |b, &n| {
            let p = Vector2::new(0.3, -0.2);
            b.iter_batched(
                || pairs(n, 18),
                |ps| {
                    for (t, _) in &ps {
                        let _ = t.closest_points(&p);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest);
criterion_main!(benches);
