//! Free-text station and line lookup.

use crate::domain::{Station, normalize};
use crate::network::{Line, StationCatalog};

/// Maps user-typed names to catalog stations and lines.
///
/// All matching ignores case and surrounding whitespace.
#[derive(Debug, Clone, Copy)]
pub struct StationResolver<'a> {
    catalog: &'a StationCatalog,
}

impl<'a> StationResolver<'a> {
    pub fn new(catalog: &'a StationCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve a query to a single station by exact name.
    ///
    /// Uses the catalog's name index, so a name shared by several lines
    /// resolves to the station ingested last. Returns `None` if nothing
    /// matches.
    pub fn resolve(&self, query: &str) -> Option<&'a Station> {
        let wanted = normalize(query);
        if wanted.is_empty() {
            return None;
        }

        if let Some(id) = self.catalog.by_name(&wanted) {
            return self.catalog.get(id);
        }

        self.catalog
            .stations()
            .iter()
            .find(|s| s.key() == wanted)
    }

    /// Search stations by name.
    ///
    /// Tries, in order, and returns the first tier with any result:
    /// 1. exact name matches
    /// 2. names containing the query
    /// 3. for multi-word queries, names containing any word longer than
    ///    one character
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&'a Station> {
        let wanted = normalize(query);
        if wanted.is_empty() {
            return Vec::new();
        }

        let stations = self.catalog.stations();

        let exact: Vec<&Station> = stations.iter().filter(|s| s.key() == wanted).collect();
        if !exact.is_empty() {
            return exact;
        }

        let containing: Vec<&Station> = stations
            .iter()
            .filter(|s| s.key().contains(&wanted))
            .collect();
        if !containing.is_empty() || !wanted.contains(char::is_whitespace) {
            return containing;
        }

        let words: Vec<&str> = wanted
            .split_whitespace()
            .filter(|w| w.chars().count() > 1)
            .collect();
        stations
            .iter()
            .filter(|s| {
                let key = s.key();
                words.iter().any(|w| key.contains(w))
            })
            .collect()
    }

    /// Find the first line whose name contains the query.
    ///
    /// Lines are tried in the order they were first seen. A blank query
    /// matches no line.
    pub fn find_line(&self, query: &str) -> Option<&'a Line> {
        let wanted = normalize(query);
        if wanted.is_empty() {
            return None;
        }

        self.catalog
            .lines()
            .iter()
            .find(|line| line.name().to_lowercase().contains(&wanted))
    }
}
