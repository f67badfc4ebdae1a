use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::network::{NetworkHandle, Reload, TransitNetwork};
use metro_server::source::{self, StationSource};
use metro_server::upstream::{CacheConfig, CachedUpstream, UpstreamClient};
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let source: Arc<dyn StationSource> = Arc::from(source::from_config(&config.source));
    info!(source = %source.describe(), "Loading station data");

    // An unreadable source still starts the server, on the built-in stations
    let records = source.load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load station data");
        Vec::new()
    });
    let handle = NetworkHandle::new(TransitNetwork::load(&records, config.routing));

    if let Some(period) = config.refresh_interval() {
        let handle = handle.clone();
        let source = source.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                if let Reload::Swapped { stations } = handle.refresh(source.as_ref()) {
                    info!(stations, "Refreshed station data");
                }
            }
        });
    }

    let mut state = AppState::new(handle);
    if let Some(upstream) = config.upstream {
        info!(url = %upstream.base_url, "Routing through upstream service");
        let client = UpstreamClient::new(upstream)?;
        state = state.with_upstream(CachedUpstream::new(client, &CacheConfig::default()));
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "Metro route planner listening");

    axum::serve(listener, app).await?;
    Ok(())
}
