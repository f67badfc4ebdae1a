//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::planner::{DEFAULT_INTERCHANGE_COST, DEFAULT_RIDE_COST, RoutingConfig};
use crate::upstream::UpstreamConfig;

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8082";

/// Default interval between station data refreshes, in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 300;

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Where station data is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Directory of per-line JSON files
    Lines(PathBuf),
    /// CSV station table
    Csv(PathBuf),
    /// Built-in demo network
    Embedded,
}

/// Configuration for the metro server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,
    /// Station data source
    pub source: SourceConfig,
    /// Seconds between data refreshes; 0 disables refreshing
    pub refresh_secs: u64,
    /// Remote routing service to try before the local engine
    pub upstream: Option<UpstreamConfig>,
    /// Edge costs for the pathfinder
    pub routing: RoutingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8082)),
            source: SourceConfig::Embedded,
            refresh_secs: DEFAULT_REFRESH_SECS,
            upstream: None,
            routing: RoutingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// `METRO_LINES_DIR` takes precedence over `METRO_CSV`. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind = match get("METRO_BIND") {
            Some(value) => value.parse::<SocketAddr>().map_err(|e| {
                ConfigError::Invalid {
                    var: "METRO_BIND",
                    value,
                    reason: e.to_string(),
                }
            })?,
            None => Self::default().bind,
        };

        let source = if let Some(dir) = get("METRO_LINES_DIR") {
            SourceConfig::Lines(dir.into())
        } else if let Some(path) = get("METRO_CSV") {
            SourceConfig::Csv(path.into())
        } else {
            SourceConfig::Embedded
        };

        let refresh_secs = number(get("METRO_REFRESH_SECS"), "METRO_REFRESH_SECS")?
            .unwrap_or(DEFAULT_REFRESH_SECS);

        let upstream = match get("METRO_UPSTREAM_URL") {
            Some(url) => {
                let mut config = UpstreamConfig::new(url);
                if let Some(secs) = number(
                    get("METRO_UPSTREAM_TIMEOUT_SECS"),
                    "METRO_UPSTREAM_TIMEOUT_SECS",
                )? {
                    config = config.with_timeout(secs);
                }
                Some(config)
            }
            None => None,
        };

        let ride_cost = number(get("METRO_RIDE_COST"), "METRO_RIDE_COST")?
            .unwrap_or(DEFAULT_RIDE_COST);
        let interchange_cost = number(get("METRO_INTERCHANGE_COST"), "METRO_INTERCHANGE_COST")?
            .unwrap_or(DEFAULT_INTERCHANGE_COST);

        Ok(Self {
            bind,
            source,
            refresh_secs,
            upstream,
            routing: RoutingConfig::new(ride_cost, interchange_cost),
        })
    }

    /// Set the listen address.
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Set the station data source.
    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }

    /// Set the refresh interval in seconds.
    pub fn with_refresh_secs(mut self, secs: u64) -> Self {
        self.refresh_secs = secs;
        self
    }

    /// Set the upstream routing service.
    pub fn with_upstream(mut self, upstream: UpstreamConfig) -> Self {
        self.upstream = Some(upstream);
        self
    }

    /// Set the pathfinder edge costs.
    pub fn with_routing(mut self, routing: RoutingConfig) -> Self {
        self.routing = routing;
        self
    }

    /// Refresh interval, or `None` if refreshing is disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_secs > 0).then(|| Duration::from_secs(self.refresh_secs))
    }
}

fn number<T>(value: Option<String>, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|value| {
            value.parse().map_err(|e: T::Err| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}
