//! Arena handles for vertices and airports.

use std::fmt;

/// Dense handle to a vertex in an [`ObjectGraph`](crate::graph::ObjectGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// The arena index behind this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Dense handle to an airport in a [`FlightNetwork`](crate::graph::FlightNetwork).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportId(pub(crate) usize);

impl AirportId {
    /// The arena index behind this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.0)
    }
}
