//! Route types.
//!
//! A `Route` is the result of a shortest-path query: the stations ridden
//! through from source to destination, with the number of line changes.

use super::{DomainError, Station};

/// A computed route between two stations.
///
/// # Invariants
///
/// - The path has at least one station
/// - The path starts at `source`
/// - `cost` is `None` only for the placeholder route returned when the
///   search could not connect the two stations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    source: Station,
    destination: Station,
    path: Vec<Station>,
    cost: Option<u32>,
}

impl Route {
    /// Constructs a route from a reconstructed path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or does not start at `source`.
    pub fn new(
        source: Station,
        destination: Station,
        path: Vec<Station>,
        cost: Option<u32>,
    ) -> Result<Self, DomainError> {
        match path.first() {
            None => return Err(DomainError::EmptyPath),
            Some(first) if *first != source => {
                return Err(DomainError::PathStartMismatch {
                    expected: source.to_string(),
                    found: first.to_string(),
                });
            }
            Some(_) => {}
        }

        Ok(Self {
            source,
            destination,
            path,
            cost,
        })
    }

    /// A route that does not move: source and destination share a name.
    pub fn stay(source: Station, destination: Station) -> Self {
        Self {
            path: vec![source.clone()],
            source,
            destination,
            cost: Some(0),
        }
    }

    /// Placeholder route for stations the search could not connect.
    ///
    /// The path is `[source, destination]`, but the two are not linked.
    pub fn unreachable(source: Station, destination: Station) -> Self {
        Self {
            path: vec![source.clone(), destination.clone()],
            source,
            destination,
            cost: None,
        }
    }

    pub fn source(&self) -> &Station {
        &self.source
    }

    pub fn destination(&self) -> &Station {
        &self.destination
    }

    /// Stations from source to destination, inclusive.
    pub fn path(&self) -> &[Station] {
        &self.path
    }

    /// Sum of edge weights along the path, `None` if not connected.
    pub fn cost(&self) -> Option<u32> {
        self.cost
    }

    /// False for the placeholder route built when no path exists.
    pub fn is_connected(&self) -> bool {
        self.cost.is_some()
    }

    /// Number of hops travelled (stations after the source).
    pub fn total_stations(&self) -> usize {
        self.path.len() - 1
    }

    /// Number of consecutive path steps that change line.
    pub fn interchange_count(&self) -> usize {
        self.path
            .windows(2)
            .filter(|pair| pair[0].changes_line(&pair[1]))
            .count()
    }

    /// Line of every station on the path, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.path.iter().map(Station::line).collect()
    }
}
