//! Domain types for the metro route planner.
//!
//! This module contains the core domain model types: stations as read from
//! the network data and the routes computed between them. All types enforce
//! their invariants at construction time.

mod error;
mod route;
mod station;

pub use error::DomainError;
pub use route::Route;
pub use station::{InvalidStation, Station, StationId, StationRecord, normalize};
