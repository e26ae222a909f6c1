//! Airports connected by one-way flights — the connection-graph used for
//! point-to-point reachability.

use std::collections::HashMap;

use crate::types::{AirportId, WalkError, WalkResult};

use super::{Adjacency, MapGraph};

/// An airport: a code plus its ordered outbound flights.
#[derive(Debug, Clone)]
pub struct Airport {
    code: String,
    outbound: Vec<AirportId>,
}

impl Airport {
    /// The airport code, e.g. `"JFK"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Destinations of outbound flights, in listed order.
    pub fn outbound_flights(&self) -> &[AirportId] {
        &self.outbound
    }
}

/// A set of airports and the flights between them.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: Vec<Airport>,
    by_code: HashMap<String, AirportId>,
}

impl FlightNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport. Codes must be unique.
    pub fn add_airport(&mut self, code: impl Into<String>) -> WalkResult<AirportId> {
        let code = code.into();
        if self.by_code.contains_key(&code) {
            return Err(WalkError::DuplicateAirport(code));
        }
        let id = AirportId(self.airports.len());
        self.by_code.insert(code.clone(), id);
        self.airports.push(Airport {
            code,
            outbound: Vec::new(),
        });
        Ok(id)
    }

    /// Add a one-way flight from `from` to `to`.
    pub fn add_flight(&mut self, from: AirportId, to: AirportId) -> WalkResult<()> {
        if to.0 >= self.airports.len() {
            return Err(WalkError::AirportNotFound(to.0));
        }
        let airport = self
            .airports
            .get_mut(from.0)
            .ok_or(WalkError::AirportNotFound(from.0))?;
        airport.outbound.push(to);
        Ok(())
    }

    /// Get an airport by handle.
    pub fn airport(&self, id: AirportId) -> Option<&Airport> {
        self.airports.get(id.0)
    }

    /// Look up an airport by code.
    pub fn find(&self, code: &str) -> Option<AirportId> {
        self.by_code.get(code).copied()
    }

    /// Number of airports.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of flights.
    pub fn flight_count(&self) -> usize {
        self.airports.iter().map(|a| a.outbound.len()).sum()
    }

    /// Build a network from a route map `code -> [destination codes]`.
    /// Destination-only codes become airports without outbound flights.
    pub fn from_routes(routes: &MapGraph<String>) -> WalkResult<Self> {
        let mut network = Self::new();

        let mut origins: Vec<&String> = routes.keys().collect();
        origins.sort();

        let mut origin_ids = Vec::with_capacity(origins.len());
        for code in &origins {
            origin_ids.push(network.add_airport(code.as_str())?);
        }
        for code in &origins {
            for dest in routes.neighbors(*code) {
                if network.find(dest).is_none() {
                    network.add_airport(dest.as_str())?;
                }
            }
        }
        for (code, from) in origins.into_iter().zip(origin_ids) {
            for dest in routes.neighbors(code) {
                if let Some(to) = network.find(dest) {
                    network.add_flight(from, to)?;
                }
            }
        }

        Ok(network)
    }
}

impl Adjacency for FlightNetwork {
    type Vertex = AirportId;

    fn neighbors(&self, vertex: &AirportId) -> &[AirportId] {
        match self.airports.get(vertex.0) {
            Some(airport) => &airport.outbound,
            None => &[],
        }
    }
}
