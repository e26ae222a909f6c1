//! Shared types for the graph-walk library.

pub mod error;
pub mod ids;

pub use error::{WalkError, WalkResult};
pub use ids::{AirportId, VertexId};

/// Initial capacity reserved for the DFS stack and visited-set.
pub const DEFAULT_WALK_CAPACITY: usize = 16;

/// Length of a payload as the traversal operations measure it: UTF-16 code
/// units. Characters outside the Basic Multilingual Plane count as two.
pub fn word_len(word: &str) -> usize {
    word.encode_utf16().count()
}
