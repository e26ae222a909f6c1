//! The traversal operations — each one a policy over the same [`Dfs`] walk.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::graph::{Adjacency, Dfs, MapGraph, ObjectGraph};
use crate::types::{word_len, VertexId};

use super::Sink;

/// Emit every reachable payload strictly shorter than `k` characters.
///
/// Emission follows visitation order. Vertices without a payload are still
/// walked through. Nothing is emitted for an absent start or for `k <= 0`.
pub fn print_short_words<S, K>(
    graph: &ObjectGraph<S>,
    start: Option<VertexId>,
    k: i64,
    sink: &mut K,
) where
    S: AsRef<str>,
    K: Sink<str> + ?Sized,
{
    let Some(start) = start else {
        log::trace!("print_short_words: no start vertex");
        return;
    };

    let mut dfs = Dfs::new(Some(start));
    let mut emitted = 0usize;
    while let Some(id) = dfs.next(graph) {
        if let Some(word) = graph.payload(id) {
            let word = word.as_ref();
            if (word_len(word) as i64) < k {
                sink.emit(word);
                emitted += 1;
            }
        }
    }
    log::debug!(
        "print_short_words from {}: visited {}, emitted {}",
        start,
        dfs.visited().len(),
        emitted
    );
}

/// The longest payload reachable from `start`, including its own.
///
/// Ties keep the first word in visitation order. Absent payloads count as
/// the empty string. Returns `""` for an absent start.
pub fn longest_word<S>(graph: &ObjectGraph<S>, start: Option<VertexId>) -> &str
where
    S: AsRef<str>,
{
    let mut longest = "";
    let mut longest_len = 0usize;

    let mut dfs = Dfs::new(start);
    while let Some(id) = dfs.next(graph) {
        let word = graph.payload(id).map(|w| w.as_ref()).unwrap_or("");
        let len = word_len(word);
        if len > longest_len {
            longest = word;
            longest_len = len;
        }
    }
    longest
}

/// Emit the payload of every reachable vertex that lists itself as a
/// neighbor, in visitation order.
pub fn print_self_loopers<T, K>(graph: &ObjectGraph<T>, start: Option<VertexId>, sink: &mut K)
where
    K: Sink<T> + ?Sized,
{
    let mut dfs = Dfs::new(start);
    while let Some(id) = dfs.next(graph) {
        if !graph.neighbors(&id).contains(&id) {
            continue;
        }
        match graph.payload(id) {
            Some(payload) => sink.emit(payload),
            None => log::trace!("self-looping vertex {} has no payload", id),
        }
    }
}

/// Outcome of a point-to-point reachability search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachOutcome {
    /// Whether the destination was found.
    pub reached: bool,
    /// Number of distinct vertices visited before the search ended.
    pub visited: usize,
}

/// Depth-first search from `start` for `destination`, stopping at the first
/// hit. An absent endpoint is never reachable; `start == destination` is
/// reachable without visiting anything.
pub fn search_reach<G>(
    graph: &G,
    start: Option<G::Vertex>,
    destination: Option<G::Vertex>,
) -> ReachOutcome
where
    G: Adjacency + ?Sized,
{
    let (Some(start), Some(destination)) = (start, destination) else {
        return ReachOutcome {
            reached: false,
            visited: 0,
        };
    };
    if start == destination {
        return ReachOutcome {
            reached: true,
            visited: 0,
        };
    }

    let mut dfs = Dfs::new(Some(start));
    let flow = dfs.try_for_each(graph, |vertex| {
        if *vertex == destination {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    let outcome = ReachOutcome {
        reached: flow.is_break(),
        visited: dfs.visited().len(),
    };
    log::debug!(
        "reachability search: reached={} after {} vertices",
        outcome.reached,
        outcome.visited
    );
    outcome
}

/// Whether `destination` can be reached from `start` by following outbound
/// connections.
pub fn can_reach<G>(graph: &G, start: Option<G::Vertex>, destination: Option<G::Vertex>) -> bool
where
    G: Adjacency + ?Sized,
{
    search_reach(graph, start, destination).reached
}

/// Every vertex reachable from `start`, in visitation order.
pub fn reachable<G>(graph: &G, start: Option<G::Vertex>) -> Vec<G::Vertex>
where
    G: Adjacency + ?Sized,
{
    let mut dfs = Dfs::new(start);
    std::iter::from_fn(|| dfs.next(graph)).collect()
}

/// Keys of `graph` that cannot be reached from `starting`.
///
/// The universe is the key set only; values that appear solely as neighbors
/// are never reported. Missing keys are treated as vertices without
/// outgoing edges. Absent graph or start gives the empty set.
pub fn unreachable<T>(graph: Option<&MapGraph<T>>, starting: Option<&T>) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    let (Some(graph), Some(starting)) = (graph, starting) else {
        return HashSet::new();
    };

    let mut dfs = Dfs::new(Some(starting.clone()));
    while dfs.next(graph).is_some() {}
    let reached = dfs.into_visited();

    let result: HashSet<T> = graph
        .keys()
        .filter(|key| !reached.contains(*key))
        .cloned()
        .collect();
    log::debug!(
        "unreachable: {} of {} keys not reachable ({} vertices reached)",
        result.len(),
        graph.len(),
        reached.len()
    );
    result
}
