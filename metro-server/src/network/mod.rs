//! The transit network: catalog, graph, and the queries answered over them.
//!
//! A [`TransitNetwork`] is built once from a complete list of station
//! records and never changes afterwards. Reloading builds a new network and
//! publishes it through a [`NetworkHandle`], so readers always see one
//! consistent snapshot.

mod catalog;
mod graph;
mod handle;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::info;

pub use catalog::{CatalogError, CatalogOrigin, Line, StationCatalog};
pub use graph::TransitGraph;
pub use handle::{NetworkHandle, Reload};

use crate::domain::{Route, Station, StationRecord};
use crate::planner::{Pathfinder, RoutingConfig, RoutingError};
use crate::stations::StationResolver;

/// An immutable, queryable metro network.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    catalog: StationCatalog,
    graph: TransitGraph,
    config: RoutingConfig,
    fingerprint: u64,
}

impl TransitNetwork {
    /// Build a network from raw records.
    ///
    /// Falls back to the built-in stations if the records yield none.
    pub fn load(records: &[StationRecord], config: RoutingConfig) -> Self {
        let catalog = StationCatalog::load(records);
        let graph = TransitGraph::build(&catalog);

        info!(
            stations = catalog.len(),
            lines = catalog.lines().len(),
            edges = graph.edge_count(),
            origin = ?catalog.origin(),
            "Built transit network"
        );

        Self {
            catalog,
            graph,
            config,
            fingerprint: fingerprint(records),
        }
    }

    /// Find the cheapest route between two free-text station names.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::StationNotResolved`] naming the query that
    /// matched no station.
    pub fn find_route(&self, source: &str, destination: &str) -> Result<Route, RoutingError> {
        let resolver = self.resolver();
        let from = resolver
            .resolve(source)
            .ok_or_else(|| RoutingError::StationNotResolved(source.trim().to_string()))?;
        let to = resolver
            .resolve(destination)
            .ok_or_else(|| RoutingError::StationNotResolved(destination.trim().to_string()))?;

        Pathfinder::new(&self.catalog, &self.graph, &self.config).route(from, to)
    }

    /// Search stations by free-text name.
    pub fn search_stations(&self, query: &str) -> Vec<Station> {
        self.resolver()
            .search(query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Names of all lines, in the order first seen.
    pub fn list_lines(&self) -> Vec<String> {
        self.catalog
            .lines()
            .iter()
            .map(|line| line.name().to_string())
            .collect()
    }

    /// Stations of the first line whose name contains the query, in travel
    /// order. Empty if no line matches.
    pub fn stations_on_line(&self, query: &str) -> Vec<Station> {
        self.resolver()
            .find_line(query)
            .map(|line| self.catalog.line_stations(line))
            .unwrap_or_default()
    }

    /// Every station, in ingestion order.
    pub fn all_stations(&self) -> &[Station] {
        self.catalog.stations()
    }

    /// True if consecutive stations of the route are joined in the graph.
    pub fn is_linked(&self, route: &Route) -> bool {
        self.graph.links_path(&self.catalog, route.path())
    }

    pub fn resolver(&self) -> StationResolver<'_> {
        StationResolver::new(&self.catalog)
    }

    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Hash of the records this network was built from.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

/// Hash a record list, to tell whether a reload would change anything.
pub fn fingerprint(records: &[StationRecord]) -> u64 {
    let mut hasher = DefaultHasher::new();
    records.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<StationRecord> {
        vec![
            StationRecord::new("A", "Yellow", 0),
            StationRecord::new("B", "Yellow", 1),
            StationRecord::new("C", "Yellow", 2),
            StationRecord::new("D", "Blue", 0),
            StationRecord::new("B", "Blue", 1),
            StationRecord::new("E", "Blue", 2),
        ]
    }

    fn network() -> TransitNetwork {
        TransitNetwork::load(&records(), RoutingConfig::default())
    }

    #[test]
    fn find_route_across_interchange() {
        let net = network();
        let route = net.find_route("A", "E").unwrap();

        let path: Vec<String> = route.path().iter().map(ToString::to_string).collect();
        assert_eq!(path, vec!["A (Yellow)", "B (Yellow)", "B (Blue)", "E (Blue)"]);
        assert_eq!(route.cost(), Some(5));
        assert_eq!(route.interchange_count(), 1);
        assert!(net.is_linked(&route));
    }

    #[test]
    fn find_route_unknown_endpoint() {
        let net = network();

        let err = net.find_route("A", "Z").unwrap_err();
        assert!(matches!(err, RoutingError::StationNotResolved(ref q) if q == "Z"));
        assert_eq!(err.to_string(), "station not found: Z");

        let err = net.find_route("  nowhere ", "A").unwrap_err();
        assert!(matches!(err, RoutingError::StationNotResolved(ref q) if q == "nowhere"));
    }

    #[test]
    fn find_route_to_itself() {
        let net = network();
        let route = net.find_route("c", " C ").unwrap();

        assert_eq!(route.path().len(), 1);
        assert_eq!(route.path()[0].name(), "C");
        assert_eq!(route.interchange_count(), 0);
        assert_eq!(route.total_stations(), 0);
    }

    #[test]
    fn find_route_between_islands() {
        let mut recs = records();
        recs.push(StationRecord::new("X", "Grey", 0));
        let net = TransitNetwork::load(&recs, RoutingConfig::default());

        let route = net.find_route("A", "X").unwrap();
        assert!(!route.is_connected());
        assert!(!net.is_linked(&route));
        assert_eq!(route.path().len(), 2);
    }

    #[test]
    fn lists_lines_in_first_seen_order() {
        assert_eq!(network().list_lines(), vec!["Yellow", "Blue"]);
    }

    #[test]
    fn stations_on_line_by_fragment() {
        let net = network();

        assert_eq!(net.stations_on_line("BLU").len(), 3);

        let stations = net.stations_on_line("yellow");
        let names: Vec<&str> = stations.iter().map(Station::name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        assert!(net.stations_on_line("violet").is_empty());
    }

    #[test]
    fn search_stations_clones_matches() {
        let net = network();
        let found = net.search_stations("b");
        assert_eq!(found.len(), 2);
        assert!(net.search_stations("  ").is_empty());
    }

    #[test]
    fn empty_input_loads_fallback() {
        let net = TransitNetwork::load(&[], RoutingConfig::default());

        assert_eq!(net.catalog().origin(), CatalogOrigin::Fallback);
        assert!(!net.all_stations().is_empty());
        let route = net.find_route("Kashmere Gate", "Mandi House").unwrap();
        assert!(route.is_connected());
    }

    #[test]
    fn identical_input_gives_identical_graph() {
        let first = network();
        let second = network();

        assert_eq!(first.graph(), second.graph());
        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn fingerprint_tracks_content() {
        let mut changed = records();
        changed[0].name = "Alpha".to_string();
        assert_ne!(fingerprint(&records()), fingerprint(&changed));
    }
}
