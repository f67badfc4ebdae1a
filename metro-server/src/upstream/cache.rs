//! Caching layer for upstream route responses.
//!
//! Routes only change when the remote network is rebuilt, so successful
//! answers are kept for a short TTL. Failures are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::normalize;
use crate::web::RouteResponse;

use super::client::UpstreamClient;
use super::error::UpstreamError;

/// Cache key: normalized (source, destination) queries.
type RouteKey = (String, String);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Upstream client with caching.
pub struct CachedUpstream {
    client: UpstreamClient,
    routes: MokaCache<RouteKey, Arc<RouteResponse>>,
}

impl CachedUpstream {
    pub fn new(client: UpstreamClient, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, routes }
    }

    /// Shortest path from the remote service, using the cache if possible.
    ///
    /// Queries differing only in case or surrounding whitespace share an
    /// entry.
    pub async fn shortest_path(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Arc<RouteResponse>, UpstreamError> {
        let key = route_key(source, destination);

        if let Some(cached) = self.routes.get(&key).await {
            debug!(source, destination, "Upstream cache hit");
            return Ok(cached);
        }

        let route = Arc::new(self.client.shortest_path(source, destination).await?);
        self.routes.insert(key, route.clone()).await;

        Ok(route)
    }
}

fn route_key(source: &str, destination: &str) -> RouteKey {
    (normalize(source), normalize(destination))
}
