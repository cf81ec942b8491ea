/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scc_finder::prelude::*;

const NUM_SAMPLES: usize = 10;

/// A long cycle with random chords, plus as many random arcs
/// among a disjoint set of nodes.
fn bench_graph(n: i64) -> EdgeListGraph {
    let mut rng = StdRng::seed_from_u64(0);
    let mut arcs = Vec::with_capacity(4 * n as usize);
    for x in 0..n {
        arcs.push((x, (x + 1) % n));
        arcs.push((x, rng.random_range(0..n)));
    }
    for _ in 0..n {
        arcs.push((rng.random_range(n..2 * n), rng.random_range(n..2 * n)));
    }
    EdgeListGraph::from_arcs(arcs)
}

pub fn bench_kosaraju(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kosaraju");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    for n in [10_000, 1_000_000] {
        let graph = bench_graph(n);
        group.throughput(Throughput::Elements(graph.num_arcs() as u64));
        group.bench_with_input(BenchmarkId::new("finish_order", n), &graph, |b, graph| {
            b.iter(|| black_box(finish_order(graph.transpose(), no_logging![])))
        });
        group.bench_with_input(BenchmarkId::new("kosaraju", n), &graph, |b, graph| {
            b.iter(|| {
                black_box(sccs::kosaraju(
                    graph.forward(),
                    graph.transpose(),
                    no_logging![],
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kosaraju);
criterion_main!(benches);
