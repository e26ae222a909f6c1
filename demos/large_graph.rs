//! 100K vertex performance demo — deep chains and dense cycles.

use std::time::Instant;

use graph_walk::*;

fn main() -> WalkResult<()> {
    let vertex_count = 100_000;
    let edges_per_vertex = 3;

    println!("Creating graph with {} vertices...", vertex_count);
    let start = Instant::now();

    let mut builder: GraphBuilder<String> = GraphBuilder::new();
    let ids: Vec<VertexId> = (0..vertex_count)
        .map(|i| builder.add(format!("word_{}", "x".repeat(i % 23))))
        .collect();

    // A single long chain keeps the walk deep; the extra edges add cycles.
    for i in 0..vertex_count {
        for j in 1..=edges_per_vertex {
            let target = (i + j * 7919) % vertex_count;
            builder.link(ids[i], ids[target]);
        }
        if i % 1000 == 0 {
            builder.link(ids[i], ids[i]);
        }
    }
    let graph = builder.build()?;
    println!(
        "  Graph built in {:?} ({} vertices, {} edges)",
        start.elapsed(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let t = Instant::now();
    let order = reachable(&graph, Some(ids[0]));
    println!("  Reached {} vertices in {:?}", order.len(), t.elapsed());

    let t = Instant::now();
    let longest = longest_word(&graph, Some(ids[0]));
    println!("  Longest word (length {}) in {:?}", word_len(longest), t.elapsed());

    let t = Instant::now();
    let mut loopers: Vec<String> = Vec::new();
    print_self_loopers(&graph, Some(ids[0]), &mut loopers);
    println!("  {} self-loopers in {:?}", loopers.len(), t.elapsed());

    let t = Instant::now();
    let hit = can_reach(&graph, Some(ids[0]), Some(ids[vertex_count - 1]));
    println!("  can_reach(first, last) = {} in {:?}", hit, t.elapsed());

    Ok(())
}
