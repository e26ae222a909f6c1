//! Arena-backed object graph — vertices with optional payloads and ordered
//! neighbor lists.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{VertexId, WalkError, WalkResult};

use super::{Adjacency, MapGraph};

/// A single vertex: an optional payload plus an ordered neighbor list.
///
/// Neighbors may include the vertex itself and may form arbitrary cycles.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    payload: Option<T>,
    neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    /// The payload, if present.
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Ordered neighbor handles.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

/// Object graph with dense `VertexId` handles. Vertex identity is handle
/// equality, never payload equality.
#[derive(Debug, Clone)]
pub struct ObjectGraph<T> {
    vertices: Vec<Vertex<T>>,
    edge_count: usize,
}

impl<T> ObjectGraph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edge_count: 0,
        }
    }

    /// Add a vertex and return its handle.
    pub fn add_vertex(&mut self, payload: Option<T>) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            payload,
            neighbors: Vec::new(),
        });
        id
    }

    /// Append `to` to the neighbor list of `from`. Self-edges and parallel
    /// edges are allowed.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> WalkResult<()> {
        if to.0 >= self.vertices.len() {
            return Err(WalkError::VertexNotFound(to.0));
        }
        let vertex = self
            .vertices
            .get_mut(from.0)
            .ok_or(WalkError::VertexNotFound(from.0))?;
        vertex.neighbors.push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Get a vertex by handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Payload of a vertex; `None` for unknown handles or absent payloads.
    pub fn payload(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).and_then(Vertex::payload)
    }

    /// Whether `id` belongs to this graph.
    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, counting self-edges and parallel edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All vertex handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }
}

impl<T: Clone + Eq + Hash + Ord> ObjectGraph<T> {
    /// Build an object graph from an adjacency map. Every distinct value
    /// becomes one vertex carrying that value: keys first in sorted order,
    /// then neighbor-only values in order of first appearance.
    pub fn from_map(map: &MapGraph<T>) -> (Self, HashMap<T, VertexId>) {
        let mut graph = Self::new();
        let mut lookup: HashMap<T, VertexId> = HashMap::with_capacity(map.len());

        let mut keys: Vec<&T> = map.keys().collect();
        keys.sort();

        for key in &keys {
            let id = graph.add_vertex(Some((*key).clone()));
            lookup.insert((*key).clone(), id);
        }
        for key in &keys {
            for neighbor in map.neighbors(*key) {
                if !lookup.contains_key(neighbor) {
                    let id = graph.add_vertex(Some(neighbor.clone()));
                    lookup.insert(neighbor.clone(), id);
                }
            }
        }

        for key in keys {
            let from = lookup[key];
            for neighbor in map.neighbors(key) {
                let to = lookup[neighbor];
                graph.vertices[from.0].neighbors.push(to);
                graph.edge_count += 1;
            }
        }

        (graph, lookup)
    }
}

impl<T> Default for ObjectGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Adjacency for ObjectGraph<T> {
    type Vertex = VertexId;

    fn neighbors(&self, vertex: &VertexId) -> &[VertexId] {
        match self.vertices.get(vertex.0) {
            Some(v) => &v.neighbors,
            None => &[],
        }
    }
}
