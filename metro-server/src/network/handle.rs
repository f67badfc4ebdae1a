//! Atomically swappable access to the current network.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, info, warn};

use crate::domain::StationRecord;
use crate::source::StationSource;

use super::{TransitNetwork, fingerprint};

/// Outcome of a reload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    /// The records match the current network; nothing was rebuilt.
    Unchanged,
    /// A new network was built and published.
    Swapped { stations: usize },
    /// The source failed or came back empty; the current network stays.
    Skipped,
}

/// Shared handle to the active [`TransitNetwork`].
///
/// Constructed once at startup and cloned into whatever serves queries.
/// Readers take a snapshot and query it without locking; a reload builds a
/// complete new network before swapping it in, so a snapshot never
/// changes under its reader.
#[derive(Debug, Clone)]
pub struct NetworkHandle {
    inner: Arc<ArcSwap<TransitNetwork>>,
}

impl NetworkHandle {
    pub fn new(network: TransitNetwork) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(network)),
        }
    }

    /// The network as of now.
    pub fn snapshot(&self) -> Arc<TransitNetwork> {
        self.inner.load_full()
    }

    /// Publish a new network, returning the one it replaced.
    pub fn replace(&self, network: TransitNetwork) -> Arc<TransitNetwork> {
        self.inner.swap(Arc::new(network))
    }

    /// Rebuild from fresh records if they differ from the current ones.
    ///
    /// The routing configuration of the current network is kept.
    pub fn reload(&self, records: &[StationRecord]) -> Reload {
        let current = self.inner.load();
        if current.fingerprint() == fingerprint(records) {
            debug!(records = records.len(), "Station data unchanged, keeping network");
            return Reload::Unchanged;
        }

        let network = TransitNetwork::load(records, *current.config());
        let stations = network.catalog().len();
        self.inner.store(Arc::new(network));
        info!(stations, "Published reloaded network");

        Reload::Swapped { stations }
    }

    /// Re-read `source` and reload from it.
    ///
    /// A failed or empty load leaves the current network in place.
    pub fn refresh(&self, source: &dyn StationSource) -> Reload {
        match source.load() {
            Ok(records) if records.is_empty() => {
                warn!(
                    source = %source.describe(),
                    "Station source is empty, keeping current network"
                );
                Reload::Skipped
            }
            Ok(records) => self.reload(&records),
            Err(e) => {
                warn!(
                    error = %e,
                    "Failed to refresh station data, keeping current network"
                );
                Reload::Skipped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::RoutingConfig;
    use crate::source::SourceError;

    /// Source that replays a fixed answer.
    struct Fixed(Result<Vec<StationRecord>, ()>);

    impl StationSource for Fixed {
        fn load(&self) -> Result<Vec<StationRecord>, SourceError> {
            self.0.clone().map_err(|()| SourceError::Json {
                path: "lines/red.json".into(),
                message: "expected array".into(),
            })
        }

        fn describe(&self) -> String {
            "fixed records".into()
        }
    }

    fn line(name: &str, count: u32) -> Vec<StationRecord> {
        (0..count)
            .map(|i| StationRecord::new(format!("{name} {i}"), name, i))
            .collect()
    }

    #[test]
    fn reload_skips_identical_records() {
        let records = line("Red", 4);
        let handle = NetworkHandle::new(TransitNetwork::load(&records, RoutingConfig::default()));

        assert_eq!(handle.reload(&records), Reload::Unchanged);
    }

    #[test]
    fn reload_swaps_on_change() {
        let handle = NetworkHandle::new(TransitNetwork::load(
            &line("Red", 4),
            RoutingConfig::default(),
        ));
        let before = handle.snapshot();

        assert_eq!(handle.reload(&line("Red", 6)), Reload::Swapped { stations: 6 });

        // The old snapshot is untouched
        assert_eq!(before.all_stations().len(), 4);
        assert_eq!(handle.snapshot().all_stations().len(), 6);
    }

    #[test]
    fn reload_keeps_routing_config() {
        let config = RoutingConfig::new(2, 7);
        let handle = NetworkHandle::new(TransitNetwork::load(&line("Red", 2), config));

        handle.reload(&line("Blue", 3));
        assert_eq!(*handle.snapshot().config(), config);
    }

    #[test]
    fn replace_returns_previous() {
        let handle = NetworkHandle::new(TransitNetwork::load(
            &line("Red", 2),
            RoutingConfig::default(),
        ));
        let old = handle.replace(TransitNetwork::load(&line("Blue", 5), RoutingConfig::default()));

        assert_eq!(old.list_lines(), vec!["Red"]);
        assert_eq!(handle.snapshot().list_lines(), vec!["Blue"]);
    }

    #[test]
    fn refresh_keeps_network_when_source_fails() {
        let handle = NetworkHandle::new(TransitNetwork::load(
            &line("Red", 4),
            RoutingConfig::default(),
        ));
        let before = handle.snapshot();

        assert_eq!(handle.refresh(&Fixed(Err(()))), Reload::Skipped);
        assert!(Arc::ptr_eq(&before, &handle.snapshot()));
    }

    #[test]
    fn refresh_keeps_network_when_source_is_empty() {
        let handle = NetworkHandle::new(TransitNetwork::load(
            &line("Red", 4),
            RoutingConfig::default(),
        ));
        let before = handle.snapshot();

        assert_eq!(handle.refresh(&Fixed(Ok(Vec::new()))), Reload::Skipped);
        assert!(Arc::ptr_eq(&before, &handle.snapshot()));
        assert_eq!(handle.snapshot().list_lines(), vec!["Red"]);
    }

    #[test]
    fn refresh_reloads_from_source() {
        let handle = NetworkHandle::new(TransitNetwork::load(
            &line("Red", 4),
            RoutingConfig::default(),
        ));

        assert_eq!(handle.refresh(&Fixed(Ok(line("Red", 4)))), Reload::Unchanged);
        assert_eq!(
            handle.refresh(&Fixed(Ok(line("Blue", 5)))),
            Reload::Swapped { stations: 5 }
        );
        assert_eq!(handle.snapshot().list_lines(), vec!["Blue"]);
    }

    #[test]
    fn readers_see_whole_snapshots_during_reloads() {
        let handle = NetworkHandle::new(TransitNetwork::load(
            &line("Red", 3),
            RoutingConfig::default(),
        ));

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let reader = handle.clone();
                scope.spawn(move || {
                    for _ in 0..200 {
                        let net = reader.snapshot();
                        assert_eq!(net.catalog().len(), net.graph().node_count());
                        let first = net.all_stations()[0].name().to_string();
                        let last = net.all_stations().last().unwrap().name().to_string();
                        let route = net.find_route(&first, &last).unwrap();
                        assert!(net.is_linked(&route));
                    }
                });
            }

            for n in 3..40 {
                handle.reload(&line("Red", n));
            }
        });

        assert_eq!(handle.snapshot().all_stations().len(), 39);
    }
}
