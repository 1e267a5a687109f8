mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use grid2d::prelude::LAPLACE_KERNEL;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const POINT_QUERIES: usize = 10_000;

fn access_fill_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("access/fill");

    for &side in &common::GRID_SIDES {
        let mut grid = common::ramp_grid(side);
        group.throughput(common::elements_throughput(grid.len()));
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                grid.fill(|row, column| (row ^ column) as f32);
                black_box(grid.get(0, 0));
            });
        });
    }

    group.finish();
}

fn access_point_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("access/get_at_point");
    group.throughput(common::elements_throughput(POINT_QUERIES));

    for &side in &common::GRID_SIDES {
        let grid = common::ramp_grid(side);
        let extent = side as f32;
        let mut rng = StdRng::seed_from_u64(0x6121D ^ side as u64);
        let points: Vec<Vec2> = (0..POINT_QUERIES)
            .map(|_| {
                Vec2::new(
                    rng.random::<f32>() * extent * 1.1,
                    rng.random::<f32>() * extent * 1.1,
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let hits = points
                    .iter()
                    .filter(|p| grid.get_at_point(**p).is_some())
                    .count();
                black_box(hits);
            });
        });
    }

    group.finish();
}

fn access_neighborhood_benches(c: &mut Criterion) {
    let grid = common::ramp_grid(256);
    let mut group = c.benchmark_group("access/true_for_every_neighbor");

    for distance in [1usize, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(distance),
            &distance,
            |b, &distance| {
                b.iter(|| {
                    let ok = grid.true_for_every_neighbor(128, 128, distance, |v| *v >= 0.0);
                    black_box(ok);
                });
            },
        );
    }

    group.finish();
}

fn access_laplace_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("access/laplace_3x3_full_pass");

    for &side in &common::GRID_SIDES {
        let grid = common::ramp_grid(side);
        group.throughput(common::elements_throughput(grid.len()));
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let mut total = 0.0;
                for cell in grid.cells() {
                    total += grid.laplace_3x3(cell.row, cell.column, &LAPLACE_KERNEL, |v| *v);
                }
                black_box(total);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = access_fill_benches, access_point_benches, access_neighborhood_benches, access_laplace_benches
}
criterion_main!(benches);
