//! Benchmarks `sat` over a synthetic dense graph, exercising its
//! `O(|φ| · (|S| + |→|))` time bound.

use criterion::{criterion_group, criterion_main, Criterion};
use ctl_formula::Formula;
use kripke_graph::Graph;

fn ring_graph(n: u32) -> Graph {
    let mut g = Graph::new(0);
    for i in 0..n {
        g.add_transition(i, (i + 1) % n);
        if i % 3 == 0 {
            g.add_label(i, "p");
        }
        if i % 5 == 0 {
            g.add_label(i, "q");
        }
    }
    g
}

fn bench_sat(c: &mut Criterion) {
    let g = ring_graph(2_000);
    let formula = Formula::ap("p")
        .eu(Formula::ap("q"))
        .ag()
        .or(Formula::ap("p").ef());

    c.bench_function("sat_ring_2000", |b| {
        b.iter(|| ctl_checker::sat(&g, &formula).unwrap())
    });
}

criterion_group!(benches, bench_sat);
criterion_main!(benches);
