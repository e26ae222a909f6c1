//! Cycle-safe depth-first traversal (preorder).

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::types::DEFAULT_WALK_CAPACITY;

use super::Adjacency;

/// Depth-first walker with an explicit stack.
///
/// Visits vertices in the same order as the recursive formulation: the start
/// first, then each neighbor in listed order, depth-first. A vertex enters the
/// visited-set exactly once, when it is first yielded, so cycles and
/// self-loops terminate. The walker holds no borrow of the graph; pass the
/// same graph to every [`next`](Self::next) call.
#[derive(Debug, Clone)]
pub struct Dfs<V> {
    stack: Vec<V>,
    visited: HashSet<V>,
}

impl<V: Clone + Eq + std::hash::Hash> Dfs<V> {
    /// Create a walker rooted at `start`. An absent start yields nothing.
    pub fn new(start: Option<V>) -> Self {
        let mut stack = Vec::with_capacity(DEFAULT_WALK_CAPACITY);
        stack.extend(start);
        Self {
            stack,
            visited: HashSet::with_capacity(DEFAULT_WALK_CAPACITY),
        }
    }

    /// Next vertex in preorder, or `None` once every reachable vertex has
    /// been visited.
    pub fn next<G>(&mut self, graph: &G) -> Option<V>
    where
        G: Adjacency<Vertex = V> + ?Sized,
    {
        while let Some(current) = self.stack.pop() {
            if !self.visited.insert(current.clone()) {
                continue;
            }
            // Reversed so the first listed neighbor is popped first.
            self.stack.extend(
                graph
                    .neighbors(&current)
                    .iter()
                    .rev()
                    .filter(|n| !self.visited.contains(*n))
                    .cloned(),
            );
            return Some(current);
        }
        None
    }

    /// Feed the remaining preorder to `f`, stopping at the first `Break`.
    pub fn try_for_each<G, B, F>(&mut self, graph: &G, mut f: F) -> ControlFlow<B>
    where
        G: Adjacency<Vertex = V> + ?Sized,
        F: FnMut(&V) -> ControlFlow<B>,
    {
        while let Some(vertex) = self.next(graph) {
            f(&vertex)?;
        }
        ControlFlow::Continue(())
    }

    /// Whether `vertex` has been yielded.
    pub fn is_visited(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    /// Every vertex yielded so far.
    pub fn visited(&self) -> &HashSet<V> {
        &self.visited
    }

    /// Consume the walker, keeping its visited-set.
    pub fn into_visited(self) -> HashSet<V> {
        self.visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MapGraph;

    fn map(edges: &[(char, &[char])]) -> MapGraph<char> {
        edges.iter().map(|(k, v)| (*k, v.to_vec())).collect()
    }

    fn order(graph: &MapGraph<char>, start: char) -> Vec<char> {
        let mut dfs = Dfs::new(Some(start));
        std::iter::from_fn(|| dfs.next(graph)).collect()
    }

    #[test]
    fn test_preorder_matches_recursive_order() {
        let g = map(&[('a', &['b', 'e']), ('b', &['c', 'd']), ('e', &['f'])]);
        assert_eq!(order(&g, 'a'), vec!['a', 'b', 'c', 'd', 'e', 'f']);
    }

    #[test]
    fn test_shared_child_visited_once() {
        // c is reachable through both b and d.
        let g = map(&[('a', &['b', 'd']), ('b', &['c']), ('d', &['c'])]);
        assert_eq!(order(&g, 'a'), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_cycle_terminates() {
        let g = map(&[('a', &['b']), ('b', &['c']), ('c', &['a', 'c'])]);
        assert_eq!(order(&g, 'a'), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_absent_start_yields_nothing() {
        let g = map(&[('a', &['b'])]);
        let mut dfs = Dfs::new(None);
        assert_eq!(dfs.next(&g), None);
        assert!(dfs.visited().is_empty());
    }

    #[test]
    fn test_try_for_each_stops_on_break() {
        let g = map(&[('a', &['b', 'c']), ('b', &['d'])]);
        let mut dfs = Dfs::new(Some('a'));
        let mut seen = Vec::new();
        let flow = dfs.try_for_each(&g, |v| {
            seen.push(*v);
            if *v == 'b' {
                ControlFlow::Break(*v)
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break('b'));
        assert_eq!(seen, vec!['a', 'b']);
        assert!(!dfs.is_visited(&'c'));
        assert!(!dfs.is_visited(&'d'));
    }
}
