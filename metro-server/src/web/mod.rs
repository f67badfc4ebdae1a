//! Web layer for the metro route planner.
//!
//! Provides the JSON endpoints for listing lines and stations, searching
//! stations, and finding the shortest path between two of them.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
