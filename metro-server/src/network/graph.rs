//! Adjacency between stations.
//!
//! Two kinds of edge exist: riding one stop along a line, and changing
//! between same-named stations on different lines. Edges are undirected
//! and carry no stored weight; the planner prices them by comparing lines.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Station, StationId};

use super::catalog::StationCatalog;

/// Undirected adjacency over a catalog's stations.
///
/// Every station of the catalog has an entry, possibly empty. Neighbour
/// sets are ordered, so two builds from the same catalog compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitGraph {
    adjacency: Vec<BTreeSet<StationId>>,
}

impl TransitGraph {
    /// Build the graph for a catalog.
    pub fn build(catalog: &StationCatalog) -> Self {
        let mut graph = Self {
            adjacency: vec![BTreeSet::new(); catalog.len()],
        };

        // Consecutive stops along each line
        for line in catalog.lines() {
            for pair in line.stations().windows(2) {
                graph.add_edge(pair[0], pair[1]);
            }
        }

        // Every pair of same-named stations is an interchange
        let mut by_name: BTreeMap<String, Vec<StationId>> = BTreeMap::new();
        for (i, station) in catalog.stations().iter().enumerate() {
            by_name.entry(station.key()).or_default().push(StationId(i));
        }
        for group in by_name.values().filter(|g| g.len() > 1) {
            for (i, &a) in group.iter().enumerate() {
                for &b in &group[i + 1..] {
                    graph.add_edge(a, b);
                }
            }
        }

        graph
    }

    /// Add an edge in both directions. Self-loops are ignored.
    fn add_edge(&mut self, a: StationId, b: StationId) {
        if a == b {
            return;
        }
        self.adjacency[a.0].insert(b);
        self.adjacency[b.0].insert(a);
    }

    /// Stations directly reachable from `id`.
    pub fn neighbours(&self, id: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency
            .get(id.0)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// True if an edge joins the two stations.
    pub fn are_adjacent(&self, a: StationId, b: StationId) -> bool {
        self.adjacency.get(a.0).is_some_and(|set| set.contains(&b))
    }

    /// True if every consecutive pair of `path` is joined by an edge.
    ///
    /// Stations outside the catalog make the path unlinked.
    pub fn links_path(&self, catalog: &StationCatalog, path: &[Station]) -> bool {
        let ids: Option<Vec<StationId>> = path.iter().map(|s| catalog.id_of(s)).collect();
        match ids {
            Some(ids) => ids.windows(2).all(|pair| self.are_adjacent(pair[0], pair[1])),
            None => false,
        }
    }

    /// Number of stations in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }
}
