use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::sync::{mpsc, watch};
use crate::common::common::{resolve_host, resolve_socket_address};
use crate::config::structs::configuration::Configuration;
use crate::management::management::management_service;
use crate::management::structs::management_console::ManagementConsole;
use crate::proxy::enums::proxy_error::ProxyError;
use crate::proxy::proxy::{build_ring, stats_console};
use crate::proxy::structs::proxy_server::ProxyServer;
use crate::ring::structs::hash_ring::HashRing;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::udp::structs::parse_pool::ParsePool;
use crate::udp::structs::relay::Relay;
use crate::udp::udp::udp_service;

impl ProxyServer {
    /// Builds the ring, binds the sockets and spawns every task.
    pub async fn start(config: Arc<Configuration>, shutdown: watch::Receiver<bool>) -> Result<ProxyServer, ProxyError>
    {
        let stats = Arc::new(StatsAtomics::new());
        let ring = Arc::new(build_ring(&config).await);
        stats.set_stats(StatsEvent::BackendsConfigured, ring.len() as i64);
        stats.set_stats(StatsEvent::BackendsAlive, ring.alive_count() as i64);

        let host = resolve_host(&config.host);
        let udp_bind = resolve_socket_address(&host, config.port).map_err(|e| ProxyError::Address(e.to_string()))?;

        let management_bind = if config.management_port != 0 {
            let management_host = resolve_host(&config.management_host);
            Some(resolve_socket_address(&management_host, config.management_port).map_err(|e| ProxyError::Address(e.to_string()))?)
        } else {
            None
        };

        let (work_tx, work_rx) = mpsc::channel(config.queue_size.max(1));
        let (relay_tx, relay_rx) = mpsc::channel(config.queue_size.max(1));

        let (udp_addr, listener_handle) = udp_service(udp_bind, config.receive_buffer_size, work_tx, stats.clone(), shutdown.clone())
            .await
            .map_err(|source| ProxyError::Bind { address: udp_bind.to_string(), source })?;

        let (management_addr, management_handle) = if let Some(management_bind) = management_bind {
            let console = Arc::new(ManagementConsole::new(ring.clone(), stats.clone()));
            let (management_addr, management_handle) = match management_service(management_bind, console, shutdown.clone()).await {
                Ok(bound) => bound,
                Err(source) => {
                    listener_handle.abort();
                    return Err(ProxyError::Bind { address: management_bind.to_string(), source });
                }
            };
            (Some(management_addr), Some(management_handle))
        } else {
            info!("[BOOT] Management console disabled");
            (None, None)
        };

        let mut handles = vec![listener_handle];
        if let Some(management_handle) = management_handle {
            handles.push(management_handle);
        }

        handles.push(Relay::new(ring.clone(), stats.clone()).start(relay_rx));
        info!("[BOOT] Starting {} parse workers with queues of {}", config.worker_threads, config.queue_size);
        handles.extend(ParsePool::new(config.worker_threads, work_rx, stats.clone()).start_thread(relay_tx));

        for backend in ring.backends() {
            handles.push(backend.clone().start_health_check(stats.clone(), shutdown.clone()));
        }

        if config.log_console_interval > 0 {
            handles.push(stats_console(stats.clone(), config.log_console_interval, shutdown.clone()));
        }

        Ok(ProxyServer {
            udp_addr,
            management_addr,
            ring,
            stats,
            handles,
        })
    }

    /// Address the UDP listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.udp_addr
    }

    pub fn management_addr(&self) -> Option<SocketAddr> {
        self.management_addr
    }

    pub fn ring(&self) -> &Arc<HashRing> {
        &self.ring
    }

    pub fn stats(&self) -> &Arc<StatsAtomics> {
        &self.stats
    }

    /// Waits for every task to finish. Tasks stop once the shutdown signal
    /// fires.
    pub async fn wait(self) {
        for handle in self.handles {
            let _ = handle.await;
        }
    }
}
