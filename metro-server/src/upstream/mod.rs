//! Remote routing service.
//!
//! When configured, route queries are first sent to another instance of
//! this API; the local engine answers if that fails.

mod cache;
mod client;
mod error;

pub use cache::{CacheConfig, CachedUpstream};
pub use client::{DEFAULT_TIMEOUT_SECS, UpstreamClient, UpstreamConfig};
pub use error::UpstreamError;
