use std::sync::Arc;
use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::metric::structs::metric_sample::MetricSample;
use crate::ring::structs::hash_ring::HashRing;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::udp::structs::relay::Relay;

impl Relay {
    pub fn new(ring: Arc<HashRing>, stats: Arc<StatsAtomics>) -> Relay {
        Relay { ring, stats }
    }

    /// Sends `sample` to every backend the ring resolves it to.
    ///
    /// Returns the number of backends the line was written to. Failures are
    /// counted and logged, never retried.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn relay_metric(&self, sample: &MetricSample) -> usize {
        let backends = match self.ring.resolve_metric(&sample.name) {
            Ok(backends) => backends,
            Err(error) => {
                self.stats.update_stats(StatsEvent::Unroutable, 1);
                debug!("[RELAY] Dropping {}: {error}", sample.name);
                return 0;
            }
        };
        let mut relayed = 0;
        for backend in backends {
            match backend.send(&sample.raw) {
                Ok(_) => {
                    self.stats.update_stats(StatsEvent::MetricsRelayed, 1);
                    relayed += 1;
                }
                Err(error) => {
                    self.stats.update_stats(StatsEvent::RelayFailures, 1);
                    debug!("[RELAY] Failed to relay {} to {}: {error}", sample.name, backend.key());
                }
            }
        }
        relayed
    }

    /// Spawns the relay loop. It dispatches samples in arrival order and
    /// exits once every worker has dropped its sender.
    pub fn start(self, mut receiver: mpsc::Receiver<MetricSample>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!("[RELAY] Starting relay over {} backend(s), mirror: {}", self.ring.len(), self.ring.is_mirror());
            while let Some(sample) = receiver.recv().await {
                self.relay_metric(&sample);
            }
            info!("[RELAY] Relay queue closed, shutting down relay...");
        })
    }
}
