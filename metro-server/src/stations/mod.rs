//! Station name lookup.
//!
//! Resolves free-text station and line names against a catalog: exact
//! lookup for routing endpoints, tiered fuzzy search for suggestions.

mod resolver;

pub use resolver::StationResolver;
