use std::sync::Arc;
use std::time::{Duration, Instant};
use futures_util::future::join_all;
use log::{error, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::backend::structs::statsd_backend::StatsdBackend;
use crate::common::common::resolve_host;
use crate::config::structs::configuration::Configuration;
use crate::proxy::enums::proxy_error::ProxyError;
use crate::proxy::structs::proxy_server::ProxyServer;
use crate::ring::structs::hash_ring::HashRing;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// Loads and validates the configuration at `config_path`, then runs the
/// proxy until `shutdown` fires.
pub async fn start_proxy(config_path: &str, shutdown: watch::Receiver<bool>) -> Result<(), ProxyError>
{
    let config = match Configuration::load_file(config_path).and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            error!("[CONFIG] Error parsing config file {config_path}: {e}");
            return Err(e.into());
        }
    };
    run_proxy(Arc::new(config), shutdown).await
}

/// Runs the proxy with an already loaded configuration until `shutdown`
/// fires, then waits for every task to finish.
pub async fn run_proxy(config: Arc<Configuration>, shutdown: watch::Receiver<bool>) -> Result<(), ProxyError>
{
    let server = ProxyServer::start(config, shutdown).await?;
    server.wait().await;
    info!("[BOOT] Proxy stopped");
    Ok(())
}

/// Builds the hash ring from the configured nodes.
///
/// Every backend is probed once before it is offered to the ring. Backends
/// that cannot be constructed or fail the probe are logged and left out.
pub async fn build_ring(config: &Configuration) -> HashRing
{
    let mut backends = Vec::with_capacity(config.nodes.len());
    for node in &config.nodes {
        let host = resolve_host(&node.host);
        match StatsdBackend::new(&host, node.port, node.management_port, config.check_interval) {
            Ok(backend) => backends.push(Arc::new(backend)),
            Err(e) => warn!("[RING] Skipping backend {host}:{}: {e}", node.port)
        }
    }

    join_all(backends.iter().map(|backend| backend.check_liveness())).await;

    let mut ring = HashRing::new(config.mirror);
    for backend in backends {
        let key = backend.key();
        let position = backend.ring_position();
        match ring.add(backend) {
            Ok(()) => info!("[RING] Added backend {key} at position {position}"),
            Err(e) => warn!("[RING] Error adding backend to hash ring: {e}")
        }
    }
    if ring.is_empty() {
        warn!("[RING] No usable backends, every metric will be dropped");
    }
    ring
}

/// Spawns the task logging a `[STATS]` line every `interval_secs` seconds.
pub fn stats_console(stats: Arc<StatsAtomics>, interval_secs: u64, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()>
{
    info!("[BOOT] Starting thread for console updates with {interval_secs} seconds delay...");
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
        interval.tick().await;
        let mut last: (Instant, Stats) = (Instant::now(), stats.get_stats());
        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("[BOOT] Shutting down thread for console updates...");
                    return;
                }
                _ = interval.tick() => {
                    let current = stats.get_stats();
                    let elapsed = last.0.elapsed().as_secs().max(1) as i64;
                    info!(
                        "[STATS] Datagrams: {} ({}/s) - Lines: {} - Parsed: {} - Malformed: {} | Relayed: {} ({}/s) - Failures: {} - Unroutable: {} | Backends alive: {}/{}",
                        current.datagrams_received, (current.datagrams_received - last.1.datagrams_received) / elapsed,
                        current.packets_received, current.metrics_parsed, current.malformed_metrics,
                        current.metrics_relayed, (current.metrics_relayed - last.1.metrics_relayed) / elapsed,
                        current.relay_failures, current.unroutable,
                        current.backends_alive, current.backends_configured
                    );
                    last = (Instant::now(), current);
                }
            }
        }
    })
}
