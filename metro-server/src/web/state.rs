//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkHandle;
use crate::upstream::CachedUpstream;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Current transit network
    pub network: NetworkHandle,

    /// Remote routing service, tried before the local network
    pub upstream: Option<Arc<CachedUpstream>>,
}

impl AppState {
    /// Create a state that answers everything locally.
    pub fn new(network: NetworkHandle) -> Self {
        Self {
            network,
            upstream: None,
        }
    }

    /// Route queries through `upstream` first.
    pub fn with_upstream(mut self, upstream: CachedUpstream) -> Self {
        self.upstream = Some(Arc::new(upstream));
        self
    }
}
