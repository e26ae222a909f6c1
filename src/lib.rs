//! graph-walk — cycle-safe depth-first traversal algorithms.
//!
//! Works over three graph shapes through the [`Adjacency`] trait: an arena
//! object graph whose vertices carry optional payloads, an adjacency map from
//! value to neighbor values, and an airport network used for point-to-point
//! reachability. Every operation walks with a fresh visited-set, so cyclic
//! and self-looping graphs always terminate.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    can_reach, longest_word, print_self_loopers, print_short_words, reachable, search_reach,
    unreachable, LineSink, ReachOutcome, Sink,
};
pub use graph::{
    Adjacency, Airport, Dfs, FlightNetwork, GraphBuilder, MapGraph, ObjectGraph, Vertex,
};
pub use types::{word_len, AirportId, VertexId, WalkError, WalkResult, DEFAULT_WALK_CAPACITY};
