//! The traversal operations and the sinks they emit into.

pub mod sink;
pub mod walk;

pub use sink::{LineSink, Sink};
pub use walk::{
    can_reach, longest_word, print_self_loopers, print_short_words, reachable, search_reach,
    unreachable, ReachOutcome,
};
