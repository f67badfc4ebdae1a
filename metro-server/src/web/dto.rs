//! Data transfer objects for web requests and responses.
//!
//! Field names follow the metro API used by existing clients, so another
//! instance of this server can act as an upstream.

use serde::{Deserialize, Serialize};

use crate::domain::{Route, Station};

/// Query for `/stationsByLine`.
#[derive(Debug, Deserialize)]
pub struct LineQuery {
    /// Line name or part of one
    pub line: Option<String>,
}

/// Query for `/shortestPath`.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub source: Option<String>,
    pub destination: Option<String>,
}

/// Query for `/searchStations`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

/// A route between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    /// Name of the resolved source station
    pub source: String,

    /// Name of the resolved destination station
    pub destination: String,

    /// Station names along the route, source first
    pub path: Vec<String>,

    /// Line of each station in `path`
    pub lines: Vec<String>,

    /// Number of line changes
    pub interchanges: usize,

    /// Number of hops travelled
    pub total_stations: usize,

    /// False when no path exists and `path` is just the two endpoints.
    /// Servers that predate this field always found a path.
    #[serde(default = "connected_by_default")]
    pub connected: bool,
}

fn connected_by_default() -> bool {
    true
}

/// A station in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationView {
    pub name: String,
    pub line: String,
    pub index: u32,
}

/// Error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl RouteResponse {
    /// Convert a domain route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            source: route.source().name().to_string(),
            destination: route.destination().name().to_string(),
            path: route.path().iter().map(|s| s.name().to_string()).collect(),
            lines: route.lines().into_iter().map(str::to_string).collect(),
            interchanges: route.interchange_count(),
            total_stations: route.total_stations(),
            connected: route.is_connected(),
        }
    }
}

impl StationView {
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name().to_string(),
            line: station.line().to_string(),
            index: station.index(),
        }
    }
}
