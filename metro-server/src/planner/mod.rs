//! Route planner using Dijkstra's algorithm.
//!
//! Finds the cheapest route between two stations of a transit network,
//! where riding one stop is cheap and changing lines is expensive.

mod config;
mod pathfinder;

pub use config::{DEFAULT_INTERCHANGE_COST, DEFAULT_RIDE_COST, RoutingConfig};
pub use pathfinder::{Pathfinder, RoutingError};
