//! Station catalog.
//!
//! Turns raw station records into canonical stations, grouped by line and
//! ordered along each line, with a case-insensitive name index.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::domain::{Station, StationId, StationRecord, normalize};

/// Errors from building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Every record was blank, incomplete, or a duplicate
    #[error("station data yielded no usable stations")]
    Empty,
}

/// Where a catalog's stations came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Built from the supplied records.
    Records,
    /// The supplied records were unusable; built-in stations were used.
    Fallback,
}

/// A named line and its stations in travel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    stations: Vec<StationId>,
}

impl Line {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Station ids sorted ascending by index.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }
}

/// The normalized, queryable set of stations and lines.
///
/// Immutable once built. Stations are addressed by [`StationId`], which is
/// their position in ingestion order.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
    ids: HashMap<Station, StationId>,
    lines: Vec<Line>,
    /// Lower-cased name → most recently ingested station with that name.
    by_name: HashMap<String, StationId>,
    origin: CatalogOrigin,
}

impl StationCatalog {
    /// Build a catalog from raw records.
    ///
    /// Blank records are dropped, as are exact repeats and records that
    /// reuse an index already taken on their line. When several stations
    /// share a name, the name index points at the last one ingested.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if no station survives.
    pub fn from_records(records: &[StationRecord]) -> Result<Self, CatalogError> {
        let catalog = Self::build(records, CatalogOrigin::Records);
        if catalog.stations.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    fn build(records: &[StationRecord], origin: CatalogOrigin) -> Self {
        let mut stations: Vec<Station> = Vec::new();
        let mut ids: HashMap<Station, StationId> = HashMap::new();
        let mut taken: HashSet<(String, u32)> = HashSet::new();
        let mut lines: Vec<Line> = Vec::new();
        let mut line_pos: HashMap<String, usize> = HashMap::new();
        let mut by_name: HashMap<String, StationId> = HashMap::new();

        for record in records {
            let station = match Station::from_record(record) {
                Ok(s) => s,
                Err(e) => {
                    debug!(?record, error = %e, "Dropping station record");
                    continue;
                }
            };

            if let Some(&id) = ids.get(&station) {
                by_name.insert(station.key(), id);
                continue;
            }

            if !taken.insert((station.line().to_string(), station.index())) {
                debug!(
                    station = %station,
                    index = station.index(),
                    "Dropping record with duplicate line index"
                );
                continue;
            }

            let id = StationId(stations.len());
            by_name.insert(station.key(), id);

            let pos = *line_pos
                .entry(station.line().to_string())
                .or_insert_with(|| {
                    lines.push(Line {
                        name: station.line().to_string(),
                        stations: Vec::new(),
                    });
                    lines.len() - 1
                });
            lines[pos].stations.push(id);

            ids.insert(station.clone(), id);
            stations.push(station);
        }

        for line in &mut lines {
            line.stations.sort_by_key(|id| stations[id.0].index());
        }

        Self {
            stations,
            ids,
            lines,
            by_name,
            origin,
        }
    }

    /// Build a catalog, substituting the built-in stations if the records
    /// yield none.
    pub fn load(records: &[StationRecord]) -> Self {
        match Self::from_records(records) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(
                    records = records.len(),
                    error = %e,
                    "Using built-in fallback stations"
                );
                Self::fallback()
            }
        }
    }

    /// The minimal built-in catalog.
    pub fn fallback() -> Self {
        Self::build(&fallback_records(), CatalogOrigin::Fallback)
    }

    /// All stations in ingestion order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    /// The id of a station, if it belongs to this catalog.
    pub fn id_of(&self, station: &Station) -> Option<StationId> {
        self.ids.get(station).copied()
    }

    /// Look up a station id by normalized name.
    pub fn by_name(&self, name: &str) -> Option<StationId> {
        self.by_name.get(&normalize(name)).copied()
    }

    /// Lines in the order they were first seen.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Stations of a line, in travel order.
    pub fn line_stations(&self, line: &Line) -> Vec<Station> {
        line.stations
            .iter()
            .map(|id| self.stations[id.0].clone())
            .collect()
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Stations used when the configured data yields nothing.
///
/// A short stretch of Yellow line crossing Red and Blue, enough to keep
/// routing and search answering.
fn fallback_records() -> Vec<StationRecord> {
    vec![
        StationRecord::new("Kashmere Gate", "Yellow Line", 0),
        StationRecord::new("Chandni Chowk", "Yellow Line", 1),
        StationRecord::new("New Delhi", "Yellow Line", 2),
        StationRecord::new("Rajiv Chowk", "Yellow Line", 3),
        StationRecord::new("Patel Chowk", "Yellow Line", 4),
        StationRecord::new("Central Secretariat", "Yellow Line", 5),
        StationRecord::new("Kashmere Gate", "Red Line", 0),
        StationRecord::new("Rajiv Chowk", "Blue Line", 0),
        StationRecord::new("Mandi House", "Blue Line", 1),
    ]
}
