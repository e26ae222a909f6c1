//! Adjacency-map graph — vertex value to ordered neighbor values.

use std::collections::hash_map::Keys;
use std::collections::HashMap;
use std::fs::File;
use std::hash::Hash;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::WalkResult;

use super::Adjacency;

/// A graph represented as `value -> [neighbor values]`.
///
/// A value that only ever appears as a neighbor has no outgoing edges. The
/// key set is the vertex universe for [`unreachable`](crate::engine::unreachable).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Eq + Hash"))]
pub struct MapGraph<T> {
    adjacency: HashMap<T, Vec<T>>,
}

impl<T: Eq + Hash> MapGraph<T> {
    /// Create a new empty map graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Set the neighbor list of `key`, returning the previous one.
    pub fn insert(&mut self, key: T, neighbors: Vec<T>) -> Option<Vec<T>> {
        self.adjacency.insert(key, neighbors)
    }

    /// Neighbors of `key`; empty when `key` is not in the map.
    pub fn neighbors(&self, key: &T) -> &[T] {
        self.adjacency.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `key` is a key of the map.
    pub fn contains_key(&self, key: &T) -> bool {
        self.adjacency.contains_key(key)
    }

    /// All keys, in arbitrary order.
    pub fn keys(&self) -> Keys<'_, T, Vec<T>> {
        self.adjacency.keys()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// True if the map has no keys.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of listed neighbor entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl MapGraph<String> {
    /// Parse a JSON object of the form `{"A": ["B"], "B": []}`.
    pub fn from_json_str(json: &str) -> WalkResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON adjacency map from disk.
    pub fn from_json_file(path: &Path) -> WalkResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let graph: Self = serde_json::from_reader(reader)?;
        log::debug!(
            "loaded {} keys and {} edges from {}",
            graph.len(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }
}

impl<T: Eq + Hash> Default for MapGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> From<HashMap<T, Vec<T>>> for MapGraph<T> {
    fn from(adjacency: HashMap<T, Vec<T>>) -> Self {
        Self { adjacency }
    }
}

impl<T: Eq + Hash> FromIterator<(T, Vec<T>)> for MapGraph<T> {
    fn from_iter<I: IntoIterator<Item = (T, Vec<T>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone + Eq + Hash> Adjacency for MapGraph<T> {
    type Vertex = T;

    fn neighbors(&self, vertex: &T) -> &[T] {
        MapGraph::neighbors(self, vertex)
    }
}
