//! Shortest-path search between two stations.
//!
//! Dijkstra over the transit graph with a binary-heap frontier. A station
//! may sit in the heap several times with different distances; entries for
//! stations already settled are skipped when popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{DomainError, Route, Station, StationId};
use crate::network::{StationCatalog, TransitGraph};

use super::config::RoutingConfig;

/// Error from route search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RoutingError {
    /// An endpoint is not a station of the network
    #[error("station not found: {0}")]
    StationNotResolved(String),

    /// The reconstructed route failed validation
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] DomainError),
}

/// Finds the cheapest route between stations of one network.
#[derive(Debug, Clone, Copy)]
pub struct Pathfinder<'a> {
    catalog: &'a StationCatalog,
    graph: &'a TransitGraph,
    config: &'a RoutingConfig,
}

impl<'a> Pathfinder<'a> {
    /// Create a pathfinder over a catalog and the graph built from it.
    pub fn new(
        catalog: &'a StationCatalog,
        graph: &'a TransitGraph,
        config: &'a RoutingConfig,
    ) -> Self {
        Self {
            catalog,
            graph,
            config,
        }
    }

    /// Find the cheapest route from `source` to `destination`.
    ///
    /// Stations sharing a name (on any line) produce a route of just the
    /// source. If no path connects the two, the route is the placeholder
    /// `[source, destination]` with no cost; see [`Route::is_connected`].
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::StationNotResolved`] if either station is
    /// not part of the catalog.
    pub fn route(&self, source: &Station, destination: &Station) -> Result<Route, RoutingError> {
        let src = self
            .catalog
            .id_of(source)
            .ok_or_else(|| RoutingError::StationNotResolved(source.to_string()))?;
        let dst = self
            .catalog
            .id_of(destination)
            .ok_or_else(|| RoutingError::StationNotResolved(destination.to_string()))?;

        if source.same_name(destination) {
            return Ok(Route::stay(source.clone(), destination.clone()));
        }

        let search = self.search(src, dst);

        let Some(path) = search.path_to(src, dst) else {
            debug!(
                source = %source,
                destination = %destination,
                settled = search.settled,
                "No path between stations"
            );
            return Ok(Route::unreachable(source.clone(), destination.clone()));
        };

        let cost = search.distances[dst.0];
        debug!(
            source = %source,
            destination = %destination,
            cost = ?cost,
            hops = path.len() - 1,
            settled = search.settled,
            "Route found"
        );

        let path = path
            .into_iter()
            .map(|id| self.station(id).clone())
            .collect();

        Ok(Route::new(
            source.clone(),
            destination.clone(),
            path,
            cost,
        )?)
    }

    /// Run Dijkstra from `src`, stopping once `dst` is settled.
    fn search(&self, src: StationId, dst: StationId) -> Search {
        let n = self.graph.node_count();
        let mut search = Search {
            distances: vec![None; n],
            predecessors: vec![None; n],
            settled: 0,
        };
        let mut visited = vec![false; n];
        let mut frontier = BinaryHeap::new();

        search.distances[src.0] = Some(0);
        frontier.push(Reverse((0u32, src)));

        while let Some(Reverse((dist, current))) = frontier.pop() {
            if visited[current.0] {
                continue;
            }
            visited[current.0] = true;
            search.settled += 1;

            if current == dst {
                break;
            }

            let here = self.station(current);
            for next in self.graph.neighbours(current) {
                if visited[next.0] {
                    continue;
                }

                let candidate = dist.saturating_add(self.config.edge_cost(here, self.station(next)));
                if search.distances[next.0].is_none_or(|known| candidate < known) {
                    search.distances[next.0] = Some(candidate);
                    search.predecessors[next.0] = Some(current);
                    frontier.push(Reverse((candidate, next)));
                    trace!(from = %here, to = %self.station(next), candidate, "Relaxed edge");
                }
            }
        }

        search
    }

    fn station(&self, id: StationId) -> &'a Station {
        &self.catalog.stations()[id.0]
    }
}

/// Distances and predecessors left by one search.
struct Search {
    distances: Vec<Option<u32>>,
    predecessors: Vec<Option<StationId>>,
    settled: usize,
}

impl Search {
    /// Walk predecessors back from `dst`; `None` if `dst` was not reached.
    fn path_to(&self, src: StationId, dst: StationId) -> Option<Vec<StationId>> {
        self.predecessors[dst.0]?;

        let mut path = vec![dst];
        let mut current = dst;
        while current != src {
            current = self.predecessors[current.0]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationRecord;

    fn catalog(records: &[(&str, &str, u32)]) -> StationCatalog {
        let records: Vec<StationRecord> = records
            .iter()
            .map(|(n, l, i)| StationRecord::new(*n, *l, *i))
            .collect();
        StationCatalog::from_records(&records).unwrap()
    }

    fn st(name: &str, line: &str, index: u32) -> Station {
        Station::new(name, line, index).unwrap()
    }

    fn names(route: &Route) -> Vec<String> {
        route.path().iter().map(ToString::to_string).collect()
    }

    fn yellow_blue() -> StationCatalog {
        catalog(&[
            ("A", "Yellow", 0),
            ("B", "Yellow", 1),
            ("C", "Yellow", 2),
            ("D", "Blue", 0),
            ("B", "Blue", 1),
            ("E", "Blue", 2),
        ])
    }

    #[test]
    fn routes_through_interchange() {
        let c = yellow_blue();
        let g = TransitGraph::build(&c);
        let config = RoutingConfig::default();
        let finder = Pathfinder::new(&c, &g, &config);

        let route = finder
            .route(&st("A", "Yellow", 0), &st("E", "Blue", 2))
            .unwrap();

        assert_eq!(
            names(&route),
            vec!["A (Yellow)", "B (Yellow)", "B (Blue)", "E (Blue)"]
        );
        assert_eq!(route.cost(), Some(5));
        assert_eq!(route.interchange_count(), 1);
        assert_eq!(route.total_stations(), 3);
        assert!(g.links_path(&c, route.path()));
    }

    #[test]
    fn same_line_costs_one_per_stop() {
        let c = yellow_blue();
        let g = TransitGraph::build(&c);
        let config = RoutingConfig::default();
        let finder = Pathfinder::new(&c, &g, &config);

        let route = finder
            .route(&st("C", "Yellow", 2), &st("A", "Yellow", 0))
            .unwrap();

        assert_eq!(route.cost(), Some(2));
        assert_eq!(route.interchange_count(), 0);
        assert_eq!(names(&route), vec!["C (Yellow)", "B (Yellow)", "A (Yellow)"]);
    }

    #[test]
    fn same_name_short_circuits() {
        let c = yellow_blue();
        let g = TransitGraph::build(&c);
        let config = RoutingConfig::default();
        let finder = Pathfinder::new(&c, &g, &config);

        let source = st("B", "Yellow", 1);
        let route = finder.route(&source, &st("B", "Blue", 1)).unwrap();

        assert_eq!(route.path(), &[source]);
        assert_eq!(route.interchange_count(), 0);
        assert!(route.is_connected());
    }

    #[test]
    fn unknown_station_is_not_resolved() {
        let c = yellow_blue();
        let g = TransitGraph::build(&c);
        let config = RoutingConfig::default();
        let finder = Pathfinder::new(&c, &g, &config);

        let result = finder.route(&st("A", "Yellow", 0), &st("Z", "Yellow", 9));
        assert!(matches!(
            result,
            Err(RoutingError::StationNotResolved(ref s)) if s == "Z (Yellow)"
        ));
    }

    #[test]
    fn disconnected_returns_placeholder() {
        let c = catalog(&[("A", "Red", 0), ("B", "Red", 1), ("X", "Grey", 0)]);
        let g = TransitGraph::build(&c);
        let config = RoutingConfig::default();
        let finder = Pathfinder::new(&c, &g, &config);

        let source = st("A", "Red", 0);
        let island = st("X", "Grey", 0);
        let route = finder.route(&source, &island).unwrap();

        assert_eq!(route.path(), &[source, island]);
        assert!(!route.is_connected());
        assert!(!g.links_path(&c, route.path()));
    }

    #[test]
    fn prefers_fewer_changes_when_cheaper() {
        // Red runs A..F in five hops. Green offers a shortcut A..F in two
        // hops but needs two changes: 3 + 2 + 3 = 8 > 5.
        let c = catalog(&[
            ("A", "Red", 0),
            ("P", "Red", 1),
            ("Q", "Red", 2),
            ("R", "Red", 3),
            ("S", "Red", 4),
            ("F", "Red", 5),
            ("A", "Green", 0),
            ("M", "Green", 1),
            ("F", "Green", 2),
        ]);
        let g = TransitGraph::build(&c);
        let config = RoutingConfig::default();
        let finder = Pathfinder::new(&c, &g, &config);

        let route = finder.route(&st("A", "Red", 0), &st("F", "Red", 5)).unwrap();
        assert_eq!(route.cost(), Some(5));
        assert_eq!(route.interchange_count(), 0);

        // With cheap interchanges the shortcut wins: 1 + 2 + 1 = 4.
        let cheap = RoutingConfig::new(1, 1);
        let finder = Pathfinder::new(&c, &g, &cheap);
        let route = finder.route(&st("A", "Red", 0), &st("F", "Red", 5)).unwrap();
        assert_eq!(route.cost(), Some(4));
        assert_eq!(route.interchange_count(), 2);
    }

    #[test]
    fn loops_back_to_same_name_stop() {
        // "F" on Red and "f" on Green share a name, so no search runs.
        let c = catalog(&[("A", "Red", 0), ("F", "Red", 1), ("f", "Green", 0)]);
        let g = TransitGraph::build(&c);
        let config = RoutingConfig::default();
        let finder = Pathfinder::new(&c, &g, &config);

        let route = finder.route(&st("F", "Red", 1), &st("f", "Green", 0)).unwrap();
        assert_eq!(route.path().len(), 1);
    }
}
