//! CLI command implementations.
//!
//! Every command loads a JSON adjacency map (`{"A": ["B"], "B": []}`) and
//! writes its result to `out`, either one value per line or as JSON.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crate::engine::{self, LineSink};
use crate::graph::{Adjacency, FlightNetwork, MapGraph, ObjectGraph};
use crate::types::{VertexId, WalkResult};

/// A map graph loaded from disk together with its object-graph view.
struct LoadedGraph {
    map: MapGraph<String>,
    objects: ObjectGraph<String>,
    lookup: HashMap<String, VertexId>,
}

impl LoadedGraph {
    fn load(path: &Path) -> WalkResult<Self> {
        let map = MapGraph::from_json_file(path)?;
        let (objects, lookup) = ObjectGraph::from_map(&map);
        Ok(Self {
            map,
            objects,
            lookup,
        })
    }

    /// Resolve a start value; an unknown value is an absent start.
    fn vertex(&self, value: &str) -> Option<VertexId> {
        let id = self.lookup.get(value).copied();
        if id.is_none() {
            log::debug!("'{}' names no vertex; treating start as absent", value);
        }
        id
    }
}

fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> WalkResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Print payloads reachable from `start` that are shorter than `max_len`.
pub fn cmd_short_words<W: Write>(
    path: &Path,
    start: &str,
    max_len: i64,
    json: bool,
    out: &mut W,
) -> WalkResult<()> {
    let graph = LoadedGraph::load(path)?;
    let start = graph.vertex(start);

    if json {
        let mut words: Vec<String> = Vec::new();
        engine::print_short_words(&graph.objects, start, max_len, &mut words);
        write_json(out, &serde_json::json!({ "max_len": max_len, "words": words }))
    } else {
        let mut sink = LineSink::new(&mut *out);
        engine::print_short_words(&graph.objects, start, max_len, &mut sink);
        sink.finish()?;
        Ok(())
    }
}

/// Print the longest payload reachable from `start`.
pub fn cmd_longest<W: Write>(path: &Path, start: &str, json: bool, out: &mut W) -> WalkResult<()> {
    let graph = LoadedGraph::load(path)?;
    let longest = engine::longest_word(&graph.objects, graph.vertex(start));

    if json {
        write_json(out, &serde_json::json!({ "longest": longest }))
    } else {
        writeln!(out, "{}", longest)?;
        Ok(())
    }
}

/// Print every reachable vertex that lists itself as a neighbor.
pub fn cmd_self_loops<W: Write>(
    path: &Path,
    start: &str,
    json: bool,
    out: &mut W,
) -> WalkResult<()> {
    let graph = LoadedGraph::load(path)?;
    let start = graph.vertex(start);

    if json {
        let mut loopers: Vec<String> = Vec::new();
        engine::print_self_loopers(&graph.objects, start, &mut loopers);
        write_json(out, &serde_json::json!({ "self_loops": loopers }))
    } else {
        let mut sink = LineSink::new(&mut *out);
        engine::print_self_loopers(&graph.objects, start, &mut sink);
        sink.finish()?;
        Ok(())
    }
}

/// Decide whether `to` is reachable from `from`, reading the file as a
/// route map of airport codes.
pub fn cmd_can_reach<W: Write>(
    path: &Path,
    from: &str,
    to: &str,
    json: bool,
    out: &mut W,
) -> WalkResult<()> {
    let routes = MapGraph::from_json_file(path)?;
    let network = FlightNetwork::from_routes(&routes)?;
    let outcome = engine::search_reach(&network, network.find(from), network.find(to));

    if json {
        write_json(
            out,
            &serde_json::json!({
                "from": from,
                "to": to,
                "reachable": outcome.reached,
                "visited": outcome.visited,
            }),
        )
    } else {
        writeln!(out, "{}", outcome.reached)?;
        Ok(())
    }
}

/// Print the keys that cannot be reached from `start`, sorted. A start that
/// names no vertex is absent and reports nothing.
pub fn cmd_unreachable<W: Write>(
    path: &Path,
    start: &str,
    json: bool,
    out: &mut W,
) -> WalkResult<()> {
    let graph = LoadedGraph::load(path)?;
    let known = graph.vertex(start).map(|_| start.to_owned());
    let mut result: Vec<String> = engine::unreachable(Some(&graph.map), known.as_ref())
        .into_iter()
        .collect();
    result.sort();

    if json {
        write_json(out, &serde_json::json!({ "start": start, "unreachable": result }))
    } else {
        for value in &result {
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }
}

/// Print every vertex reachable from `start` in visitation order.
pub fn cmd_walk<W: Write>(path: &Path, start: &str, json: bool, out: &mut W) -> WalkResult<()> {
    let graph = LoadedGraph::load(path)?;
    let order: Vec<&str> = engine::reachable(&graph.objects, graph.vertex(start))
        .into_iter()
        .filter_map(|id| graph.objects.payload(id).map(String::as_str))
        .collect();

    if json {
        write_json(out, &serde_json::json!({ "order": order }))
    } else {
        for value in order {
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }
}

/// Summarize a graph file.
pub fn cmd_info<W: Write>(path: &Path, json: bool, out: &mut W) -> WalkResult<()> {
    let graph = LoadedGraph::load(path)?;
    let self_loops = graph
        .objects
        .ids()
        .filter(|id| graph.objects.neighbors(id).contains(id))
        .count();
    let sinks = graph
        .objects
        .ids()
        .filter(|id| graph.objects.neighbors(id).is_empty())
        .count();

    if json {
        write_json(
            out,
            &serde_json::json!({
                "file": path.display().to_string(),
                "keys": graph.map.len(),
                "vertices": graph.objects.vertex_count(),
                "edges": graph.objects.edge_count(),
                "self_loops": self_loops,
                "sinks": sinks,
            }),
        )
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Keys: {}", graph.map.len())?;
        writeln!(out, "Vertices: {}", graph.objects.vertex_count())?;
        writeln!(out, "Edges: {}", graph.objects.edge_count())?;
        writeln!(out, "Self-loops: {}", self_loops)?;
        writeln!(out, "Sinks: {}", sinks)?;
        Ok(())
    }
}
