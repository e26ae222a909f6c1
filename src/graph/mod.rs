//! Graph representations and the depth-first traversal primitive.

pub mod builder;
pub mod flight_network;
pub mod map_graph;
pub mod object_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use flight_network::{Airport, FlightNetwork};
pub use map_graph::MapGraph;
pub use object_graph::{ObjectGraph, Vertex};
pub use traversal::Dfs;

use std::hash::Hash;

/// Read-only neighbor access shared by every graph representation.
///
/// A vertex the graph does not know about has no neighbors.
pub trait Adjacency {
    /// Stable vertex identity used to key the visited-set.
    type Vertex: Clone + Eq + Hash;

    /// Ordered, possibly empty, possibly self-referential neighbor list.
    fn neighbors(&self, vertex: &Self::Vertex) -> &[Self::Vertex];
}

impl<G: Adjacency + ?Sized> Adjacency for &G {
    type Vertex = G::Vertex;

    fn neighbors(&self, vertex: &Self::Vertex) -> &[Self::Vertex] {
        (**self).neighbors(vertex)
    }
}
