//! Fluent API for building ObjectGraph instances.

use crate::types::{VertexId, WalkResult};

use super::ObjectGraph;

/// Fluent builder for constructing an [`ObjectGraph`].
///
/// Edges are recorded unchecked and validated once in [`build`](Self::build).
pub struct GraphBuilder<T> {
    payloads: Vec<Option<T>>,
    edges: Vec<(VertexId, VertexId)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            payloads: Vec::new(),
            edges: Vec::new(),
        }
    }

    fn add_vertex(&mut self, payload: Option<T>) -> VertexId {
        let id = VertexId(self.payloads.len());
        self.payloads.push(payload);
        id
    }

    /// Add a vertex carrying `payload`.
    pub fn add(&mut self, payload: impl Into<T>) -> VertexId {
        self.add_vertex(Some(payload.into()))
    }

    /// Add a vertex with no payload.
    pub fn add_empty(&mut self) -> VertexId {
        self.add_vertex(None)
    }

    /// Add an edge from `from` to `to`.
    pub fn link(&mut self, from: VertexId, to: VertexId) -> &mut Self {
        self.edges.push((from, to));
        self
    }

    /// Add `from -> to` for every `to` in order.
    pub fn link_all(&mut self, from: VertexId, to: &[VertexId]) -> &mut Self {
        self.edges.extend(to.iter().map(|&t| (from, t)));
        self
    }

    /// Build the final ObjectGraph.
    pub fn build(self) -> WalkResult<ObjectGraph<T>> {
        let mut graph = ObjectGraph::new();
        for payload in self.payloads {
            graph.add_vertex(payload);
        }
        for (from, to) in self.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
