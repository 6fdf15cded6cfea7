// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_concentric_grid::{Grid, GridConfig, GridKind};

const KINDS: [(&str, GridKind); 3] = [
    ("rectangle", GridKind::Rectangle { shifted: false }),
    ("rectangle_shifted", GridKind::Rectangle { shifted: true }),
    ("polygon", GridKind::Polygon),
];

fn grid(side: f64, kind: GridKind) -> Grid {
    let config =
        GridConfig::new(Size::new(side, side), Size::new(20.0, 20.0)).with_cell_margin(2.0);
    Grid::from_config(&config, kind).expect("feasible grid")
}

fn bench_create_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("concentric_grid/create_grid");

    // Cell counts grow with the square of the viewport side.
    for side in [480.0_f64, 960.0, 1_920.0] {
        for (name, kind) in KINDS {
            let mut g = grid(side, kind);
            g.create_grid();
            group.throughput(Throughput::Elements(g.len() as u64));

            group.bench_with_input(BenchmarkId::new(name, side), &side, |b, _| {
                b.iter(|| {
                    g.create_grid();
                    black_box(g.len());
                });
            });
        }
    }

    group.finish();
}

fn bench_point_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("concentric_grid/point_at");

    for (name, kind) in KINDS {
        let mut g = grid(1_920.0, kind);
        g.create_grid();
        let len = g.len();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("all_indices", name), |b| {
            b.iter(|| {
                for i in 0..len {
                    black_box(g.point_at(i));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create_grid, bench_point_at);
criterion_main!(benches);
