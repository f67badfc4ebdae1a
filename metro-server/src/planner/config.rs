//! Edge pricing for the route planner.

use crate::domain::Station;

/// Default cost of riding one stop along a line.
pub const DEFAULT_RIDE_COST: u32 = 1;

/// Default cost of changing between lines at an interchange.
pub const DEFAULT_INTERCHANGE_COST: u32 = 3;

/// Weights used when searching for the cheapest route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingConfig {
    /// Cost of an edge between two stations on the same line.
    pub ride_cost: u32,

    /// Cost of an edge between stations on different lines.
    /// Higher than `ride_cost` so that routes avoid needless changes.
    pub interchange_cost: u32,
}

impl RoutingConfig {
    /// Create a configuration with the given costs.
    pub fn new(ride_cost: u32, interchange_cost: u32) -> Self {
        Self {
            ride_cost,
            interchange_cost,
        }
    }

    /// Cost of travelling directly between two adjacent stations.
    pub fn edge_cost(&self, from: &Station, to: &Station) -> u32 {
        if from.changes_line(to) {
            self.interchange_cost
        } else {
            self.ride_cost
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            ride_cost: DEFAULT_RIDE_COST,
            interchange_cost: DEFAULT_INTERCHANGE_COST,
        }
    }
}
