//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from data source and HTTP errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route has no stations
    #[error("route must have at least one station")]
    EmptyPath,

    /// Reconstructed path begins somewhere other than the source
    #[error("route path starts at {found}, expected {expected}")]
    PathStartMismatch { expected: String, found: String },
}
