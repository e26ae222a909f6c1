//! Error types for the graph-walk library.

use thiserror::Error;

/// All errors that can occur while building or loading graphs.
///
/// The traversal operations themselves never fail; absent inputs produce
/// neutral results instead.
#[derive(Error, Debug)]
pub enum WalkError {
    /// Vertex handle does not belong to the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(usize),

    /// Airport handle does not belong to the network.
    #[error("Airport {0} not found")]
    AirportNotFound(usize),

    /// An airport with this code is already registered.
    #[error("Duplicate airport code: {0}")]
    DuplicateAirport(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph file is not a valid adjacency map.
    #[error("Malformed graph file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph-walk operations.
pub type WalkResult<T> = Result<T, WalkError>;
