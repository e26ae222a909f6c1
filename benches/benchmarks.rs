//! Criterion benchmarks for graph-walk.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use graph_walk::engine::{
    can_reach, longest_word, print_self_loopers, print_short_words, reachable, unreachable,
};
use graph_walk::graph::{FlightNetwork, GraphBuilder, MapGraph, ObjectGraph};
use graph_walk::types::VertexId;

/// Build a large random object graph (cycles and self-loops included).
fn make_large_graph(node_count: usize, edges_per_node: usize) -> (ObjectGraph<String>, VertexId) {
    let mut rng = rand::thread_rng();
    let mut builder: GraphBuilder<String> = GraphBuilder::new();

    let ids: Vec<VertexId> = (0..node_count)
        .map(|i| builder.add("w".repeat(rng.gen_range(0..16)) + &i.to_string()))
        .collect();
    for &id in &ids {
        for _ in 0..edges_per_node {
            builder.link(id, ids[rng.gen_range(0..node_count)]);
        }
    }

    (builder.build().unwrap(), ids[0])
}

/// Build a random adjacency map over integer vertices.
fn make_map_graph(node_count: u64, edges_per_node: usize) -> MapGraph<u64> {
    let mut rng = rand::thread_rng();
    (0..node_count)
        .map(|i| {
            let neighbors = (0..edges_per_node)
                .map(|_| rng.gen_range(0..node_count))
                .collect();
            (i, neighbors)
        })
        .collect()
}

/// A ring of airports with no way into the last one.
fn make_network(airport_count: usize) -> FlightNetwork {
    let mut network = FlightNetwork::new();
    let ids: Vec<_> = (0..airport_count)
        .map(|i| network.add_airport(format!("A{:05}", i)).unwrap())
        .collect();
    for i in 0..airport_count - 1 {
        network
            .add_flight(ids[i], ids[(i + 1) % (airport_count - 1)])
            .unwrap();
    }
    network
}

fn bench_reachable_100k(c: &mut Criterion) {
    let (graph, start) = make_large_graph(100_000, 3);

    c.bench_function("reachable_100k", |b| {
        b.iter(|| {
            let _ = reachable(&graph, Some(start));
        })
    });
}

fn bench_short_words_100k(c: &mut Criterion) {
    let (graph, start) = make_large_graph(100_000, 3);

    c.bench_function("short_words_100k", |b| {
        b.iter(|| {
            let mut out: Vec<String> = Vec::new();
            print_short_words(&graph, Some(start), 8, &mut out);
        })
    });
}

fn bench_longest_word_100k(c: &mut Criterion) {
    let (graph, start) = make_large_graph(100_000, 3);

    c.bench_function("longest_word_100k", |b| {
        b.iter(|| {
            let _ = longest_word(&graph, Some(start));
        })
    });
}

fn bench_self_loopers_100k(c: &mut Criterion) {
    let (graph, start) = make_large_graph(100_000, 3);

    c.bench_function("self_loopers_100k", |b| {
        b.iter(|| {
            let mut out: Vec<String> = Vec::new();
            print_self_loopers(&graph, Some(start), &mut out);
        })
    });
}

fn bench_can_reach_miss_10k(c: &mut Criterion) {
    let network = make_network(10_000);
    let from = network.find("A00000");
    let to = network.find("A09999");

    c.bench_function("can_reach_miss_10k", |b| {
        b.iter(|| {
            let _ = can_reach(&network, from, to);
        })
    });
}

fn bench_unreachable_100k(c: &mut Criterion) {
    let graph = make_map_graph(100_000, 2);

    c.bench_function("unreachable_100k", |b| {
        b.iter(|| {
            let _ = unreachable(Some(&graph), Some(&0));
        })
    });
}

criterion_group!(
    benches,
    bench_reachable_100k,
    bench_short_words_100k,
    bench_longest_word_100k,
    bench_self_loopers_100k,
    bench_can_reach_miss_10k,
    bench_unreachable_100k,
);
criterion_main!(benches);
