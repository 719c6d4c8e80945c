// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use relcanvas_graph::{LayoutGraph, Sensors};
use relcanvas_precise_hit::{OctagonCache, segment_hit_test};

/// Deterministic probe points scattered over `[0, extent)²`.
fn probes(count: usize, extent: f64) -> Vec<Point> {
    let mut state = 0x9e37_79b9_u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        f64::from(state) / f64::from(u32::MAX) * extent
    };
    (0..count).map(|_| Point::new(next(), next())).collect()
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test/primitives");
    let pts = probes(1_024, 200.0);
    group.throughput(Throughput::Elements(pts.len() as u64));

    let a = Point::new(20.0, 30.0);
    let b = Point::new(180.0, 150.0);
    group.bench_function("segment", |bench| {
        bench.iter(|| {
            pts.iter()
                .filter(|&&pt| segment_hit_test(a, b, black_box(pt), 4.0))
                .count()
        });
    });

    let mut cache = OctagonCache::with_radii([10.0, 8.0, 16.0]);
    let center = Point::new(100.0, 100.0);
    group.bench_function("octagon_disc", |bench| {
        bench.iter(|| {
            pts.iter()
                .filter(|&&pt| cache.circle_hit_test(center, 10.0, black_box(pt)))
                .count()
        });
    });
    group.bench_function("octagon_annulus", |bench| {
        bench.iter(|| {
            pts.iter()
                .filter(|&&pt| cache.annulus_hit_test(center, 8.0, 16.0, black_box(pt)))
                .count()
        });
    });

    group.finish();
}

fn bench_edge_sensors(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test/edges");
    let pts = probes(256, 300.0);
    let sensors = Sensors::default();

    // A straight pair, a routed pair and a lone self-loop.
    let mut graph = LayoutGraph::new();
    let a = graph.add_node(Point::new(0.0, 0.0));
    let b = graph.add_node(Point::new(300.0, 0.0));
    let corner = graph.add_node(Point::new(300.0, 300.0));
    let straight = graph.add_edge(a, b).unwrap();
    graph.add_edge(b, a).unwrap();
    let routed = graph
        .add_routed_edge(
            a,
            corner,
            [
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(200.0, 100.0),
                Point::new(200.0, 200.0),
            ],
        )
        .unwrap();
    graph.add_edge(corner, a).unwrap();
    let self_loop = graph.add_edge(b, b).unwrap();

    for (name, edge) in [
        ("shared_straight", straight),
        ("shared_routed", routed),
        ("self_loop", self_loop),
    ] {
        group.throughput(Throughput::Elements(pts.len() as u64));
        group.bench_with_input(BenchmarkId::new("edge_is_over", name), &edge, |bench, &edge| {
            bench.iter(|| {
                pts.iter()
                    .filter(|&&pt| sensors.edge_is_over(&graph, edge, black_box(pt)))
                    .count()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_edge_sensors);
criterion_main!(benches);
