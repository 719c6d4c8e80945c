// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use relcanvas_graph::{GraphObject, LayoutGraph, Sensors};
use relcanvas_selection::graph::{GraphCanvas, GraphSelection, register_graph_classes};

const SPACING: f64 = 60.0;

struct Canvas {
    graph: LayoutGraph,
    sensors: Sensors,
    repaints: u64,
}

impl GraphCanvas for Canvas {
    type Topology = LayoutGraph;

    fn topology(&self) -> &LayoutGraph {
        &self.graph
    }

    fn sensors(&self) -> &Sensors {
        &self.sensors
    }

    fn set_highlighted(&mut self, _: GraphObject, _: bool) {
        self.repaints += 1;
    }

    fn set_selected(&mut self, _: GraphObject, _: bool) {
        self.repaints += 1;
    }
}

/// A `side × side` grid with right and down edges, every other one doubled back.
fn grid(side: u32) -> GraphSelection<Canvas> {
    let mut graph = LayoutGraph::new();
    let mut ids = Vec::new();
    for row in 0..side {
        for col in 0..side {
            ids.push(graph.add_node(Point::new(
                f64::from(col) * SPACING,
                f64::from(row) * SPACING,
            )));
        }
    }
    let at = |row: u32, col: u32| ids[(row * side + col) as usize];
    for row in 0..side {
        for col in 0..side {
            let here = at(row, col);
            if col + 1 < side {
                graph.add_edge(here, at(row, col + 1)).unwrap();
                if (row + col) % 2 == 0 {
                    graph.add_edge(at(row, col + 1), here).unwrap();
                }
            }
            if row + 1 < side {
                graph.add_edge(here, at(row + 1, col)).unwrap();
            }
        }
    }
    let canvas = Canvas {
        graph,
        sensors: Sensors::default(),
        repaints: 0,
    };
    let mut selection = GraphSelection::new(canvas);
    register_graph_classes(&mut selection).unwrap();
    selection
}

/// Pointer positions sweeping diagonally across the grid.
fn sweep(side: u32, steps: u32) -> Vec<Point> {
    let extent = f64::from(side - 1) * SPACING;
    (0..steps)
        .map(|i| {
            let t = f64::from(i) / f64::from(steps) * extent;
            Point::new(t, t * 0.5 + 3.0)
        })
        .collect()
}

fn bench_first_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/first_hit");

    // Hypothesis: linear in node + edge count, since every class is scanned in order.
    for side in [8_u32, 16, 32] {
        let selection = grid(side);
        let pts = sweep(side, 256);
        group.throughput(Throughput::Elements(pts.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &pts, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .filter_map(|&pt| selection.first_hit(black_box(pt)))
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_pointer_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/pointer_events");
    let side = 16;
    let pts = sweep(side, 256);
    group.throughput(Throughput::Elements(pts.len() as u64));

    group.bench_function("pointer_moved", |b| {
        b.iter_batched(
            || grid(side),
            |mut selection| {
                for &pt in &pts {
                    selection.pointer_moved(pt);
                }
                black_box(selection.data().repaints)
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("pointer_pressed_multi", |b| {
        b.iter_batched(
            || grid(side),
            |mut selection| {
                for &pt in &pts {
                    selection.pointer_pressed(pt, true);
                }
                black_box(selection.selected().len())
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_first_hit, bench_pointer_events);
criterion_main!(benches);
